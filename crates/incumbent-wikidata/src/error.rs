//! Error types for the incumbent-wikidata codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid timestamp: {0:?}")]
  InvalidTimestamp(String),

  #[error("claim {0} has no usable main value")]
  MissingDataValue(String),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
