//! Lifecycle provenance for domain entities.
//!
//! A [`LifeCycleEntity`] records who created an entity and when, who touched
//! it last and when, and which transition was applied most recently. It is
//! never mutated: every transition returns a new value, so older versions
//! stay inspectable for as long as a caller holds on to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
  OptionalValue,
  clock::{Clock, SystemClock},
  command::{CreateCommand, DeleteCommand, RecreateCommand, UpdateCommand},
};

// ─── Stage ───────────────────────────────────────────────────────────────────

/// The most recent transition applied to an entity. Not cumulative: an
/// updated-then-deleted entity is simply `Delete`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LifecycleStage {
  /// Newly created, not yet persisted.
  Create,
  /// Hydrated from storage.
  Read,
  Update,
  Delete,
}

/// What a repository should do with an entity in a given stage.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StorageAction {
  Insert,
  Update,
  /// Mark as deleted (tombstone); the row is kept.
  SoftDelete,
  /// Nothing changed since the entity was loaded.
  Noop,
}

impl LifecycleStage {
  pub fn storage_action(self) -> StorageAction {
    match self {
      Self::Create => StorageAction::Insert,
      Self::Read => StorageAction::Noop,
      Self::Update => StorageAction::Update,
      Self::Delete => StorageAction::SoftDelete,
    }
  }

  pub fn is_delete(self) -> bool { matches!(self, Self::Delete) }
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// Immutable creation/update/deletion provenance, generic over the user id
/// type.
///
/// `inserted_by` and `inserted_at` are fixed at creation and copied through
/// every transition. `updated_by` and `updated_at` are `None` until the first
/// update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeCycleEntity<U> {
  inserted_by: U,
  inserted_at: DateTime<Utc>,
  updated_by:  OptionalValue<U>,
  updated_at:  OptionalValue<DateTime<Utc>>,
  stage:       LifecycleStage,
}

impl<U> LifeCycleEntity<U> {
  /// Start a new entity, stamped with the current time.
  pub fn create(command: CreateCommand<U>) -> Self {
    Self::create_at(command, &SystemClock)
  }

  pub fn create_at(command: CreateCommand<U>, clock: &impl Clock) -> Self {
    let entity = Self {
      inserted_by: command.inserted_by,
      inserted_at: clock.now(),
      updated_by:  OptionalValue::none(),
      updated_at:  OptionalValue::none(),
      stage:       LifecycleStage::Create,
    };
    entity.trace_transition();
    entity
  }

  /// Rebuild an entity from persisted provenance.
  ///
  /// Every field is copied verbatim and the clock is never consulted. The
  /// stage is always [`LifecycleStage::Read`], even if the stored data shows
  /// a prior delete; track deletion separately.
  pub fn recreate(command: RecreateCommand<U>) -> Self {
    let entity = Self {
      inserted_by: command.inserted_by,
      inserted_at: command.inserted_at,
      updated_by:  command.updated_by,
      updated_at:  command.updated_at,
      stage:       LifecycleStage::Read,
    };
    entity.trace_transition();
    entity
  }

  pub fn inserted_by(&self) -> &U { &self.inserted_by }

  pub fn inserted_at(&self) -> DateTime<Utc> { self.inserted_at }

  pub fn updated_by(&self) -> &OptionalValue<U> { &self.updated_by }

  pub fn updated_at(&self) -> OptionalValue<DateTime<Utc>> { self.updated_at }

  pub fn stage(&self) -> LifecycleStage { self.stage }

  pub fn has_been_updated(&self) -> bool { self.updated_at.is_some() }

  /// `updated_at` if the entity has been touched since creation, otherwise
  /// `inserted_at`.
  pub fn last_modified_at(&self) -> DateTime<Utc> {
    self.updated_at.get_or(self.inserted_at)
  }

  /// The actor behind [`last_modified_at`](Self::last_modified_at).
  pub fn last_modified_by(&self) -> &U {
    self.updated_by.as_ref().get_or(&self.inserted_by)
  }

  fn trace_transition(&self) {
    tracing::debug!(
      stage = %self.stage,
      action = %self.stage.storage_action(),
      inserted_at = %self.inserted_at,
      "lifecycle transition"
    );
  }
}

impl<U: Clone> LifeCycleEntity<U> {
  /// Record an update by `command.updated_by` at the current time.
  pub fn update(&self, command: UpdateCommand<U>) -> Self {
    self.update_at(command, &SystemClock)
  }

  pub fn update_at(
    &self,
    command: UpdateCommand<U>,
    clock: &impl Clock,
  ) -> Self {
    self.advance(command.updated_by, clock.now(), LifecycleStage::Update)
  }

  /// Record a delete by `command.updated_by` at the current time. The
  /// entity is tagged, not removed.
  pub fn delete(&self, command: DeleteCommand<U>) -> Self {
    self.delete_at(command, &SystemClock)
  }

  pub fn delete_at(
    &self,
    command: DeleteCommand<U>,
    clock: &impl Clock,
  ) -> Self {
    self.advance(command.updated_by, clock.now(), LifecycleStage::Delete)
  }

  fn advance(
    &self,
    updated_by: U,
    updated_at: DateTime<Utc>,
    stage: LifecycleStage,
  ) -> Self {
    let entity = Self {
      inserted_by: self.inserted_by.clone(),
      inserted_at: self.inserted_at,
      updated_by:  OptionalValue::create(Some(updated_by)),
      updated_at:  OptionalValue::create(Some(updated_at)),
      stage,
    };
    entity.trace_transition();
    entity
  }
}
