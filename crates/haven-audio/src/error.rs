use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("audio file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, AudioError>;
