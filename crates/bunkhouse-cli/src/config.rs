//! Runtime settings: TOML file, then `BUNKHOUSE_*` environment variables,
//! then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bunkhouse_core::{bunk::BunkStyle, room::RoomLayout};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// SQLite file holding the `tenants` table. A leading `~/` is expanded.
  pub store_path:      PathBuf,
  pub bunk_style:      BunkStyle,
  /// Display-only prefix for payment amounts.
  pub currency_symbol: String,
  pub rooms:           Vec<RoomLayout>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      store_path:      PathBuf::from("tenants.db"),
      bunk_style:      BunkStyle::Long,
      currency_symbol: "₱".to_string(),
      rooms:           RoomLayout::defaults(),
    }
  }
}

impl Settings {
  /// Read `path` if it exists and overlay the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("BUNKHOUSE"))
      .build()
      .context("failed to read config file")?;

    let mut loaded: Self = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;
    loaded.store_path = expand_tilde(&loaded.store_path);
    Ok(loaded)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
