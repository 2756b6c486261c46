//! Error types for message formatting.
//!
//! Parsing itself never fails; these cover formatter configuration and the
//! JSON boundary towards a rendering layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid formatter options: {0}")]
    InvalidOptions(String),

    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
