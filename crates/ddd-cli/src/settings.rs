//! Runtime settings, layered from an optional TOML file and `LIFECYCLE_*`
//! environment variables. Command-line flags are applied on top in `main`.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
  /// Actor used for steps that omit `user`.
  #[serde(default)]
  pub default_actor: Option<String>,
  /// Pretty-print each record instead of one JSON object per line.
  #[serde(default)]
  pub pretty:        bool,
}

impl Settings {
  /// Load from `path` (may be missing) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LIFECYCLE"))
      .build()
      .with_context(|| format!("failed to read config {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}
