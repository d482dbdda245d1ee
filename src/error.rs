use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SrsError {
    /// The review quality score was outside the algorithm's 0-4 scale.
    #[error("quality must be between 0 and 4, got {quality}")]
    InvalidQuality { quality: i32 },
}
