//! Session label generation.

use rand::Rng;

const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns `<prefix>-<epoch_millis>-<6 chars [a-z0-9]>`.
///
/// Used for provisioning session names and generated channel names. Unique
/// enough for labelling; never an identifier callers can look up later.
pub fn session_label(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{}-{}-{}", prefix, millis, random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}
