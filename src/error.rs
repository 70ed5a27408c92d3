use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 本クレートの演算が返すエラー。
///
/// いずれも呼び出し側の誤りを表し、内部で回復や再試行は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Error {
    #[error("size mismatch: expected {expected} bits, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("bit index '{index}' is out of range (size: {size})")]
    OutOfRange { index: usize, size: usize },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("value needs {bits} bits and does not fit into {capacity} bits")]
    Overflow { bits: usize, capacity: usize },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// [`Error`] を返す演算の結果型。
pub type Result<T> = std::result::Result<T, Error>;
