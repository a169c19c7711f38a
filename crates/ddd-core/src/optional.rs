//! `OptionalValue` — a value that is either present or deliberately absent.
//!
//! Every constructor decides up front whether its input counts as a value.
//! Absent inputs, inputs equal to the previous value, and inputs guarded by a
//! false predicate all collapse to [`OptionalValue::none`]. Once built, the
//! wrapper never changes; callers that need a different value build a new one.
//!
//! Both retrieval policies live on the same type: [`OptionalValue::get_or`]
//! falls back to a caller-supplied default, [`OptionalValue::get_or_fail`]
//! returns [`Error::EmptyValueAccess`].

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A present-or-absent value. Serialises exactly like `Option<T>`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OptionalValue<T>(Option<T>);

// ─── Constructors ────────────────────────────────────────────────────────────

impl<T> OptionalValue<T> {
  /// An explicitly absent value.
  pub const fn none() -> Self { Self(None) }

  const fn some(value: T) -> Self { Self(Some(value)) }

  /// Wrap `value`; an absent input becomes `None`.
  pub fn create(value: Option<T>) -> Self {
    match value {
      Some(v) => Self::some(v),
      None => Self::none(),
    }
  }

  /// Like [`create`](Self::create), but `None` unless `predicate` holds.
  pub fn create_if(value: Option<T>, predicate: bool) -> Self {
    if !predicate {
      return Self::none();
    }
    Self::create(value)
  }

  /// Like [`create_if`](Self::create_if) with the condition evaluated on
  /// demand. The predicate runs exactly once.
  pub fn create_if_with<P>(value: Option<T>, predicate: P) -> Self
  where
    P: FnOnce() -> bool,
  {
    Self::create_if(value, predicate())
  }

  /// Compute the value only if `predicate` holds.
  ///
  /// `predicate` is evaluated first; `compute` is never called when it
  /// returns `false`. A computed `None` still collapses to `None`.
  pub fn create_lazy<F, P>(compute: F, predicate: P) -> Self
  where
    F: FnOnce() -> Option<T>,
    P: FnOnce() -> bool,
  {
    if !predicate() {
      return Self::none();
    }
    Self::create(compute())
  }
}

impl<T: PartialEq> OptionalValue<T> {
  /// Wrap `value` unless it is absent or equal to `previous`.
  ///
  /// Update commands use this to drop no-op changes: supplying the value that
  /// is already stored means there is nothing to update. An absent
  /// `previous` never compares equal.
  pub fn create_if_changed(value: Option<T>, previous: Option<&T>) -> Self {
    match value {
      Some(v) if previous != Some(&v) => Self::some(v),
      _ => Self::none(),
    }
  }
}

// ─── Inspection & retrieval ──────────────────────────────────────────────────

impl<T> OptionalValue<T> {
  pub const fn is_none(&self) -> bool { self.0.is_none() }

  pub const fn is_some(&self) -> bool { self.0.is_some() }

  /// Default-returning retrieval: `default` when absent. Never fails.
  pub fn get_or(self, default: T) -> T { self.0.unwrap_or(default) }

  /// Like [`get_or`](Self::get_or), computing the fallback only when needed.
  pub fn get_or_else<F>(self, default: F) -> T
  where
    F: FnOnce() -> T,
  {
    self.0.unwrap_or_else(default)
  }

  /// Strict retrieval: the contained value, or
  /// [`Error::EmptyValueAccess`] when absent.
  pub fn get_or_fail(self) -> Result<T> {
    self.0.ok_or(Error::EmptyValueAccess)
  }

  /// Borrow the contents, e.g. to read a field without cloning it.
  pub const fn as_ref(&self) -> OptionalValue<&T> {
    match &self.0 {
      Some(v) => OptionalValue(Some(v)),
      None => OptionalValue(None),
    }
  }

  pub const fn as_option(&self) -> Option<&T> { self.0.as_ref() }

  pub fn into_option(self) -> Option<T> { self.0 }

  pub fn map<U, F>(self, f: F) -> OptionalValue<U>
  where
    F: FnOnce(T) -> U,
  {
    OptionalValue(self.0.map(f))
  }
}

impl<T: Clone> OptionalValue<&T> {
  pub fn cloned(self) -> OptionalValue<T> { OptionalValue(self.0.cloned()) }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl<T> Default for OptionalValue<T> {
  fn default() -> Self { Self::none() }
}

impl<T> From<Option<T>> for OptionalValue<T> {
  fn from(value: Option<T>) -> Self { Self::create(value) }
}

impl<T> From<OptionalValue<T>> for Option<T> {
  fn from(value: OptionalValue<T>) -> Self { value.0 }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn create_present_value() {
    let v = OptionalValue::create(Some(42));
    assert!(!v.is_none());
    assert!(v.is_some());
    assert_eq!(v.get_or(0), 42);
    assert_eq!(v.get_or(-1), 42);
  }

  #[test]
  fn create_absent_value_falls_back() {
    let v = OptionalValue::<i32>::create(None);
    assert!(v.is_none());
    assert_eq!(v.get_or(7), 7);
    assert_eq!(v.get_or_else(|| 9), 9);
  }

  #[test]
  fn strict_retrieval() {
    assert_eq!(
      OptionalValue::<String>::none().get_or_fail(),
      Err(Error::EmptyValueAccess)
    );
    assert_eq!(
      OptionalValue::create(Some("alice".to_string())).get_or_fail(),
      Ok("alice".to_string())
    );
  }

  // ─── create_if_changed ──────────────────────────────────────────────────

  #[test]
  fn unchanged_value_collapses_to_none() {
    let prev = "same".to_string();
    let v = OptionalValue::create_if_changed(Some(prev.clone()), Some(&prev));
    assert!(v.is_none());
  }

  #[test]
  fn changed_value_is_kept() {
    let v = OptionalValue::create_if_changed(Some(2), Some(&1));
    assert_eq!(v.get_or_fail(), Ok(2));
  }

  #[test]
  fn absent_previous_never_matches() {
    let v = OptionalValue::create_if_changed(Some(5), None);
    assert_eq!(v.get_or_fail(), Ok(5));

    let v = OptionalValue::<i32>::create_if_changed(None, None);
    assert!(v.is_none());
  }

  #[test]
  fn absent_value_with_previous_is_none() {
    let v = OptionalValue::<i32>::create_if_changed(None, Some(&3));
    assert!(v.is_none());
  }

  // ─── Predicate-gated ────────────────────────────────────────────────────

  #[test]
  fn create_if_truth_table() {
    assert!(OptionalValue::create_if(Some(1), false).is_none());
    assert!(OptionalValue::<i32>::create_if(None, false).is_none());
    assert!(OptionalValue::create_if(Some(1), true).is_some());
    assert!(OptionalValue::<i32>::create_if(None, true).is_none());
  }

  #[test]
  fn create_if_with_runs_predicate_once() {
    let calls = Cell::new(0);
    let v = OptionalValue::create_if_with(Some("x"), || {
      calls.set(calls.get() + 1);
      true
    });
    assert_eq!(v.get_or_fail(), Ok("x"));
    assert_eq!(calls.get(), 1);

    let v = OptionalValue::create_if_with(Some("x"), || false);
    assert!(v.is_none());
  }

  #[test]
  fn lazy_compute_skipped_when_predicate_false() {
    let computed = Cell::new(0);
    let v = OptionalValue::create_lazy(
      || {
        computed.set(computed.get() + 1);
        Some(100)
      },
      || false,
    );
    assert!(v.is_none());
    assert_eq!(computed.get(), 0);
  }

  #[test]
  fn lazy_compute_runs_when_predicate_true() {
    let computed = Cell::new(0);
    let v = OptionalValue::create_lazy(
      || {
        computed.set(computed.get() + 1);
        Some(100)
      },
      || true,
    );
    assert_eq!(v.get_or(0), 100);
    assert_eq!(computed.get(), 1);
  }

  #[test]
  fn lazy_absent_result_collapses() {
    let v = OptionalValue::<u8>::create_lazy(|| None, || true);
    assert!(v.is_none());
  }

  // ─── Conversions & serde ────────────────────────────────────────────────

  #[test]
  fn borrow_then_clone() {
    let v = OptionalValue::create(Some(String::from("bob")));
    assert_eq!(v.as_ref().get_or_fail().map(String::as_str), Ok("bob"));
    assert_eq!(v.as_ref().cloned(), v);
    assert_eq!(v.as_option().map(String::len), Some(3));
  }

  #[test]
  fn option_conversions() {
    let v: OptionalValue<i32> = Some(3).into();
    let back: Option<i32> = v.map(|n| n * 2).into();
    assert_eq!(back, Some(6));
    assert_eq!(OptionalValue::<i32>::default(), OptionalValue::none());
  }

  #[test]
  fn serialises_like_option() {
    let some = serde_json::to_string(&OptionalValue::create(Some(5))).unwrap();
    assert_eq!(some, "5");
    let none = serde_json::to_string(&OptionalValue::<i32>::none()).unwrap();
    assert_eq!(none, "null");

    let parsed: OptionalValue<String> = serde_json::from_str("null").unwrap();
    assert!(parsed.is_none());
    let parsed: OptionalValue<String> =
      serde_json::from_str("\"carol\"").unwrap();
    assert_eq!(parsed.get_or_fail(), Ok("carol".to_string()));
  }
}
