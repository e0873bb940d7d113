use thiserror::Error;

/// Error taxonomy shared by every butler crate.
///
/// Each network-facing variant carries the identifiers of the request that
/// failed so the message surfaced to the user names the job/build involved.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no active configuration: {0}")]
    Configuration(String),

    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("failed to resolve {full_name}: {message}")]
    Resolution { full_name: String, message: String },

    #[error("failed to trigger build for {full_name}: {message}")]
    Trigger { full_name: String, message: String },

    #[error("failed to fetch logs for {full_name} #{build}: {message}")]
    LogFetch {
        full_name: String,
        build: String,
        message: String,
    },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
