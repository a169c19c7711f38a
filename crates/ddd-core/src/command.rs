//! Input structs for lifecycle transitions.
//!
//! Commands carry data only. All behaviour lives on
//! [`LifeCycleEntity`](crate::lifecycle::LifeCycleEntity).

use chrono::{DateTime, Utc};

use crate::OptionalValue;

/// Input to [`LifeCycleEntity::create`](crate::lifecycle::LifeCycleEntity::create).
/// `inserted_at` is always taken from the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommand<U> {
  pub inserted_by: U,
}

impl<U> CreateCommand<U> {
  pub fn new(inserted_by: U) -> Self { Self { inserted_by } }
}

/// Input to [`LifeCycleEntity::recreate`](crate::lifecycle::LifeCycleEntity::recreate):
/// provenance that was already persisted, accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecreateCommand<U> {
  pub inserted_by: U,
  pub inserted_at: DateTime<Utc>,
  pub updated_by:  OptionalValue<U>,
  pub updated_at:  OptionalValue<DateTime<Utc>>,
}

impl<U> RecreateCommand<U> {
  pub fn new(
    inserted_by: U,
    inserted_at: DateTime<Utc>,
    updated_by: OptionalValue<U>,
    updated_at: OptionalValue<DateTime<Utc>>,
  ) -> Self {
    Self {
      inserted_by,
      inserted_at,
      updated_by,
      updated_at,
    }
  }
}

/// Input to [`LifeCycleEntity::update`](crate::lifecycle::LifeCycleEntity::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand<U> {
  pub updated_by: U,
}

impl<U> UpdateCommand<U> {
  pub fn new(updated_by: U) -> Self { Self { updated_by } }
}

/// Input to [`LifeCycleEntity::delete`](crate::lifecycle::LifeCycleEntity::delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand<U> {
  pub updated_by: U,
}

impl<U> DeleteCommand<U> {
  pub fn new(updated_by: U) -> Self { Self { updated_by } }
}
