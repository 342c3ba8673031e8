use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("fruit catalog is empty")]
    EmptyCatalog,
    #[error("{name} interval must be positive, got {seconds}s")]
    InvalidInterval { name: &'static str, seconds: f32 },
    #[error("fall duration range is invalid: min {min}s, max {max}s")]
    InvalidFallRange { min: f32, max: f32 },
    #[error("max_wrong_selections must be at least 1")]
    ZeroMaxWrong,
    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
