use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid zoom config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step must be a positive number of pixels, got {0}")]
    InvalidStep(f32),
    #[error("ratio bounds must satisfy 0 < min <= max, got min={min} max={max}")]
    InvalidRatioBounds { min: f32, max: f32 },
    #[error("base font size must be positive, got {0}")]
    InvalidBaseFontSize(f32),
}
