//! Scenario replay: feed a sequence of lifecycle commands through
//! [`LifeCycleEntity`] and collect the audit record produced by each step.

use ddd_core::{
  LifeCycleEntity,
  clock::Clock,
  command::{CreateCommand, DeleteCommand, UpdateCommand},
  record::LifecycleRecord,
};
use serde::Deserialize;
use thiserror::Error;

/// A single scenario step, tagged by `op` in JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
  Create {
    #[serde(default)]
    user: Option<String>,
  },
  Update {
    #[serde(default)]
    user: Option<String>,
  },
  Delete {
    #[serde(default)]
    user: Option<String>,
  },
  /// Hydrate a previously written record; starts a fresh entity.
  Recreate { record: LifecycleRecord<String> },
}

impl Step {
  fn op(&self) -> &'static str {
    match self {
      Self::Create { .. } => "create",
      Self::Update { .. } => "update",
      Self::Delete { .. } => "delete",
      Self::Recreate { .. } => "recreate",
    }
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
  #[error("step {step}: no entity yet; start with `create` or `recreate`")]
  NoEntity { step: usize },

  #[error("step {step}: no `user` given and no default actor configured")]
  MissingActor { step: usize },
}

pub type Result<T, E = ScenarioError> = std::result::Result<T, E>;

/// Replays steps against a clock, filling in missing actors from
/// `default_actor`.
pub struct Replay<'a, C> {
  clock:         &'a C,
  default_actor: Option<&'a str>,
}

impl<'a, C: Clock> Replay<'a, C> {
  pub fn new(clock: &'a C, default_actor: Option<&'a str>) -> Self {
    Self {
      clock,
      default_actor,
    }
  }

  /// Apply every step in order and return one record per step. Steps are
  /// numbered from 1 in errors.
  pub fn run(&self, steps: &[Step]) -> Result<Vec<LifecycleRecord<String>>> {
    let mut current: Option<LifeCycleEntity<String>> = None;
    let mut records = Vec::with_capacity(steps.len());

    for (i, step) in steps.iter().enumerate() {
      let n = i + 1;
      tracing::debug!(step = n, op = step.op(), "applying step");

      let next = match step {
        Step::Create { user } => LifeCycleEntity::create_at(
          CreateCommand::new(self.actor(n, user.as_deref())?),
          self.clock,
        ),
        Step::Recreate { record } => record.clone().into_entity(),
        Step::Update { user } => {
          let command = UpdateCommand::new(self.actor(n, user.as_deref())?);
          Self::existing(current.as_ref(), n)?.update_at(command, self.clock)
        }
        Step::Delete { user } => {
          let command = DeleteCommand::new(self.actor(n, user.as_deref())?);
          Self::existing(current.as_ref(), n)?.delete_at(command, self.clock)
        }
      };

      records.push(LifecycleRecord::from(&next));
      current = Some(next);
    }

    Ok(records)
  }

  fn existing(
    current: Option<&LifeCycleEntity<String>>,
    step: usize,
  ) -> Result<&LifeCycleEntity<String>> {
    current.ok_or(ScenarioError::NoEntity { step })
  }

  fn actor(&self, step: usize, user: Option<&str>) -> Result<String> {
    user
      .or(self.default_actor)
      .map(str::to_string)
      .ok_or(ScenarioError::MissingActor { step })
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use ddd_core::{LifecycleStage, StorageAction, clock::FixedClock};

  use super::*;

  fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap())
  }

  fn parse(json: &str) -> Vec<Step> { serde_json::from_str(json).unwrap() }

  #[test]
  fn create_update_delete() {
    let steps = parse(
      r#"[
        {"op": "create", "user": "alice"},
        {"op": "update", "user": "bob"},
        {"op": "delete", "user": "carol"}
      ]"#,
    );
    let clock = clock();
    let records = Replay::new(&clock, None).run(&steps).unwrap();

    assert_eq!(records.len(), 3);
    let stages: Vec<_> = records.iter().map(|r| r.stage).collect();
    assert_eq!(
      stages,
      [
        LifecycleStage::Create,
        LifecycleStage::Update,
        LifecycleStage::Delete
      ]
    );
    assert!(records.iter().all(|r| r.inserted_by == "alice"));
    assert_eq!(records[0].updated_by, None);
    assert_eq!(records[1].updated_by.as_deref(), Some("bob"));
    assert_eq!(records[2].updated_by.as_deref(), Some("carol"));
    assert_eq!(records[2].action, StorageAction::SoftDelete);
    assert_eq!(records[2].updated_at, Some(clock.0));
  }

  #[test]
  fn update_before_create_fails() {
    let steps = parse(r#"[{"op": "update", "user": "bob"}]"#);
    let clock = clock();
    let err = Replay::new(&clock, None).run(&steps).unwrap_err();
    assert_eq!(err, ScenarioError::NoEntity { step: 1 });
  }

  #[test]
  fn default_actor_fills_gaps() {
    let steps = parse(r#"[{"op": "create"}, {"op": "update", "user": "bob"}]"#);
    let clock = clock();
    let records = Replay::new(&clock, Some("system")).run(&steps).unwrap();
    assert_eq!(records[0].inserted_by, "system");
    assert_eq!(records[1].updated_by.as_deref(), Some("bob"));
  }

  #[test]
  fn missing_actor_is_reported() {
    let steps = parse(r#"[{"op": "create", "user": "a"}, {"op": "delete"}]"#);
    let clock = clock();
    let err = Replay::new(&clock, None).run(&steps).unwrap_err();
    assert_eq!(err, ScenarioError::MissingActor { step: 2 });
  }

  #[test]
  fn recreate_starts_from_stored_record() {
    let steps = parse(
      r#"[
        {"op": "recreate", "record": {
          "inserted_by": "alice",
          "inserted_at": "2023-01-01T00:00:00Z",
          "updated_by": null,
          "updated_at": null,
          "stage": "create",
          "action": "insert"
        }},
        {"op": "update", "user": "bob"}
      ]"#,
    );
    let clock = clock();
    let records = Replay::new(&clock, None).run(&steps).unwrap();

    assert_eq!(records[0].stage, LifecycleStage::Read);
    assert_eq!(records[0].action, StorageAction::Noop);
    assert_eq!(
      records[1].inserted_at,
      Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(records[1].stage, LifecycleStage::Update);
  }
}
