//! Error types for `ddd-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// Strict retrieval on an [`OptionalValue`](crate::OptionalValue) that
  /// holds no value. Check `is_none()` first or use `get_or`.
  #[error("attempted to read the value of an empty optional")]
  EmptyValueAccess,

  #[error("value object cannot be built from an absent value")]
  NullValue,

  #[error("value object validation failed: {0}")]
  ValidationFailed(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
