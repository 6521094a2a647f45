//! Error type for the CPU raster and for parameters supplied from outside
//! (CLI flags, palettes).

pub type WavesResult<T> = Result<T, WavesError>;

#[derive(thiserror::Error, Debug)]
pub enum WavesError {
    #[error("invalid dimensions: {0}")]
    Dimensions(String),

    #[error("buffer size mismatch: {0}")]
    Buffer(String),

    #[error("invalid parameter: {0}")]
    Parameter(String),
}

impl WavesError {
    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::Dimensions(msg.into())
    }

    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }

    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::Parameter(msg.into())
    }
}
