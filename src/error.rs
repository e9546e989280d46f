use thiserror::Error;

/// Generator error type
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Architecture query `{command}` failed: {reason}")]
    ArchQuery { command: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
