use super::Review;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncReadExt;

/// Errors raised while obtaining a review document.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The review file could not be read
    #[error("Failed to read review from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read review from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// The document is not valid JSON or does not have the review shape
    #[error("Invalid review document: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Where the review document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSource {
    File(PathBuf),
    Stdin,
}

impl ReviewSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

/// Read and validate a review document.
pub async fn load_review(source: &ReviewSource) -> Result<Review, ReviewError> {
    let raw = match source {
        ReviewSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ReviewError::Read {
                    path: path.clone(),
                    source,
                })?
        }
        ReviewSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(ReviewError::Stdin)?;
            buf
        }
    };

    let review = Review::from_json(&raw)?;
    tracing::info!(
        title = %review.title,
        sections = review.sections.len(),
        "Loaded review document"
    );
    Ok(review)
}
