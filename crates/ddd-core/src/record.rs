//! Flat audit row for persisting a [`LifeCycleEntity`].
//!
//! Repositories write a [`LifecycleRecord`] into their audit columns and read
//! it back through [`LifecycleRecord::into_entity`], which goes through
//! [`LifeCycleEntity::recreate`]. The stored `stage` survives in the row but
//! the hydrated entity is always `Read`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  OptionalValue,
  command::RecreateCommand,
  lifecycle::{LifeCycleEntity, LifecycleStage, StorageAction},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRecord<U> {
  pub inserted_by: U,
  pub inserted_at: DateTime<Utc>,
  pub updated_by:  Option<U>,
  pub updated_at:  Option<DateTime<Utc>>,
  /// Stage at the time the row was written.
  pub stage:       LifecycleStage,
  /// What the repository does with this row; derived from `stage`.
  pub action:      StorageAction,
}

impl<U> LifecycleRecord<U> {
  /// Hydrate the entity this row describes.
  pub fn into_entity(self) -> LifeCycleEntity<U> {
    LifeCycleEntity::recreate(RecreateCommand::new(
      self.inserted_by,
      self.inserted_at,
      OptionalValue::create(self.updated_by),
      OptionalValue::create(self.updated_at),
    ))
  }

  /// Whether the stored row is a tombstone.
  pub fn is_deleted(&self) -> bool { self.stage.is_delete() }
}

impl<U: Clone> From<&LifeCycleEntity<U>> for LifecycleRecord<U> {
  fn from(entity: &LifeCycleEntity<U>) -> Self {
    Self {
      inserted_by: entity.inserted_by().clone(),
      inserted_at: entity.inserted_at(),
      updated_by:  entity.updated_by().as_option().cloned(),
      updated_at:  entity.updated_at().into_option(),
      stage:       entity.stage(),
      action:      entity.stage().storage_action(),
    }
  }
}
