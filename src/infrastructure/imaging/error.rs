use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrimError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("image has no pixel above the alpha threshold {threshold}")]
    Blank { threshold: u8 },
    #[error("padded image {width}x{height} exceeds the {limit} byte canvas limit")]
    TooLarge { width: u64, height: u64, limit: u64 },
    #[error("invalid padding: {0}")]
    InvalidPadding(String),
}
