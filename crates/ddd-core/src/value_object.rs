//! Validated value objects.
//!
//! A value object wraps a single value that must be present and must pass a
//! type-specific check. The check itself is opaque here: implementors decide
//! what "valid" means and report failures as a message.

use crate::{Error, Result};

pub trait ValueObject: Sized {
  type Value;

  /// Reject invalid input with a human-readable reason.
  fn validate(value: &Self::Value) -> std::result::Result<(), String>;

  /// Wrap a value that has already passed [`validate`](Self::validate).
  /// Call [`try_new`](Self::try_new) instead.
  fn from_valid(value: Self::Value) -> Self;

  fn value(&self) -> &Self::Value;

  fn try_new(value: Self::Value) -> Result<Self> {
    Self::validate(&value).map_err(Error::ValidationFailed)?;
    Ok(Self::from_valid(value))
  }

  /// Build from a possibly-absent input, e.g. a nullable column.
  fn try_from_option(value: Option<Self::Value>) -> Result<Self> {
    Self::try_new(value.ok_or(Error::NullValue)?)
  }
}
