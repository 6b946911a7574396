use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("missing signing credential: {0}")]
    MissingCredential(&'static str),

    #[error("channel name must not be empty")]
    EmptyChannel,
}
