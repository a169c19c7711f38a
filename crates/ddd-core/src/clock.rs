//! Time source for lifecycle transitions.
//!
//! Transitions never accept caller-supplied timestamps (hydration via
//! `recreate` aside); they ask a [`Clock`]. Production code uses
//! [`SystemClock`]; tests and replays pin time with [`FixedClock`].

use chrono::{DateTime, Utc};

pub trait Clock {
  fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> { self.0 }
}

impl<C: Clock + ?Sized> Clock for &C {
  fn now(&self) -> DateTime<Utc> { (**self).now() }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
  fn now(&self) -> DateTime<Utc> { (**self).now() }
}
