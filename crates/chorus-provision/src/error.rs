use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unsupported TTS vendor: {0}")]
    UnsupportedVendor(String),

    #[error("token error: {0}")]
    Token(#[from] chorus_token::TokenError),

    #[error("provisioning service returned {status}")]
    Upstream { status: u16, body: String },

    #[error("provisioning service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}
