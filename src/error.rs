use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid coordinate system: {0}")]
    InvalidCoord(String),
}
