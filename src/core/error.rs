use thiserror::Error;

/// Failures reported by a [`Store`](crate::core::store::Store).
///
/// `Validation` and `NotFound` are recoverable and rendered inline.
/// `Unavailable` is fatal only when it happens at session start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("please type a grocery item ({0})")]
    Validation(&'static str),
    #[error("there's no grocery item named '{0}'")]
    NotFound(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}
