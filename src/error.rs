use thiserror::Error;

pub type ScatterResult<T> = Result<T, ScatterError>;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
