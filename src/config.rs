//! Game configuration.
//!
//! Settings come from three places, each overriding the last: built-in
//! defaults, an optional TOML file, and command-line flags (see
//! [`crate::cli`]).

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// The largest playfield side, in world units, that [`Config::validate`]
/// accepts.
///
/// Positions are kept well inside `i64` so that moving by any configured
/// velocity can never overflow.
pub const MAX_EXTENT: i64 = i32::MAX as i64;

/// Tunable game constants.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Playfield width, in cells.
  pub columns: u32,
  /// Playfield height, in cells.
  pub rows: u32,
  /// World units per cell. Actors move in world units.
  pub cell_size: u32,
  /// Target frames per second.
  pub frame_rate: u32,
  /// Number of artifacts placed at the start.
  pub artifacts: u32,
  /// Number of rocks placed at the start.
  pub rocks: u32,
  /// Starting score.
  pub score: i64,
  /// How far artifacts and rocks fall each frame, in world units.
  pub fall_speed: u32,
  /// Seed for actor placement; random if unset.
  pub seed: Option<u64>,
  /// Whether to draw an FPS readout.
  pub debug: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      columns: 60,
      rows: 20,
      cell_size: 15,
      frame_rate: 12,
      artifacts: 40,
      rocks: 40,
      score: 600,
      fall_speed: 5,
      seed: None,
      debug: false,
    }
  }
}

/// An error from loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse config file {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("config value `{key}` must be positive")]
  NotPositive { key: &'static str },

  #[error("`{key}` times `cell_size` must be at most {max}")]
  TooLarge { key: &'static str, max: i64 },
}

impl Config {
  /// Parses a configuration from TOML text. Missing keys take their defaults.
  pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(text)
  }

  /// Loads a configuration from the TOML file at `path`.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml(&text).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Checks that every size and rate is usable, and that the playfield is no
  /// more than [`MAX_EXTENT`] across in either direction.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let positive = [
      ("columns", self.columns),
      ("rows", self.rows),
      ("cell_size", self.cell_size),
      ("frame_rate", self.frame_rate),
    ];
    if let Some(&(key, _)) = positive.iter().find(|(_, v)| *v == 0) {
      return Err(ConfigError::NotPositive { key });
    }

    let extents = [("columns", self.width()), ("rows", self.height())];
    match extents.iter().find(|(_, v)| *v > MAX_EXTENT) {
      Some(&(key, _)) => Err(ConfigError::TooLarge {
        key,
        max: MAX_EXTENT,
      }),
      None => Ok(()),
    }
  }

  /// Returns the playfield width, in world units, saturating at `i64::MAX`.
  pub fn width(&self) -> i64 {
    extent(self.columns, self.cell_size)
  }

  /// Returns the playfield height, in world units, saturating at `i64::MAX`.
  pub fn height(&self) -> i64 {
    extent(self.rows, self.cell_size)
  }
}

/// Returns `cells * cell_size`, in world units, saturating at `i64::MAX`.
fn extent(cells: u32, cell_size: u32) -> i64 {
  i64::from(cells).saturating_mul(i64::from(cell_size))
}
