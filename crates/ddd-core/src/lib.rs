//! Building blocks for domain models.
//!
//! - [`OptionalValue`]: a value that is present or deliberately absent, with
//!   constructors that collapse null, unchanged, or unwanted input to `None`.
//! - [`LifeCycleEntity`]: immutable creation/update/deletion provenance,
//!   advanced by pure transitions.
//!
//! Pure and synchronous; no storage or I/O dependencies.

pub mod clock;
pub mod command;
pub mod error;
pub mod lifecycle;
pub mod optional;
pub mod record;
pub mod value_object;

pub use error::{Error, Result};
pub use lifecycle::{LifeCycleEntity, LifecycleStage, StorageAction};
pub use optional::OptionalValue;
