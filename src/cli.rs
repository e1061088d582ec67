//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::config::ConfigError;

/// Collect the falling gems, dodge the falling rocks.
///
/// Move with WASD or the arrow keys; quit with q or Esc.
#[derive(Debug, Parser)]
#[command(name = "greed", version)]
pub struct Args {
  /// TOML file to read settings from.
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Playfield width, in cells.
  #[arg(long)]
  pub columns: Option<u32>,

  /// Playfield height, in cells.
  #[arg(long)]
  pub rows: Option<u32>,

  /// World units per cell.
  #[arg(long)]
  pub cell_size: Option<u32>,

  /// Target frames per second.
  #[arg(long)]
  pub frame_rate: Option<u32>,

  /// Number of artifacts to start with.
  #[arg(long)]
  pub artifacts: Option<u32>,

  /// Number of rocks to start with.
  #[arg(long)]
  pub rocks: Option<u32>,

  /// Starting score.
  #[arg(long, allow_negative_numbers = true)]
  pub score: Option<i64>,

  /// How far artifacts and rocks fall each frame, in world units.
  #[arg(long)]
  pub fall_speed: Option<u32>,

  /// Seed for placing actors.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Draw an FPS readout.
  #[arg(long)]
  pub debug: bool,

  /// Write logs to this file. Filter with RUST_LOG.
  #[arg(long, value_name = "FILE")]
  pub log_file: Option<PathBuf>,
}

impl Args {
  /// Builds the effective configuration: defaults, then the config file, then
  /// any flags given on the command line.
  pub fn config(&self) -> Result<Config, ConfigError> {
    let mut config = match &self.config {
      Some(path) => Config::load(path)?,
      None => Config::default(),
    };

    let args = self;
    macro_rules! set {
      ($($field:ident),*) => {$(
        if let Some(v) = args.$field {
          config.$field = v;
        }
      )*};
    }
    set!(
      columns, rows, cell_size, frame_rate, artifacts, rocks, score, fall_speed
    );
    if self.seed.is_some() {
      config.seed = self.seed;
    }
    config.debug |= self.debug;

    config.validate()?;
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rocks = 5\nartifacts = 9\ndebug = true").unwrap();
    let path = file.path().to_str().unwrap();

    let args =
      Args::try_parse_from(["greed", "--config", path, "--rocks", "2"])
        .unwrap();
    let config = args.config().unwrap();
    assert_eq!(config.rocks, 2);
    assert_eq!(config.artifacts, 9);
    assert!(config.debug);
    assert_eq!(config.columns, Config::default().columns);
  }

  #[test]
  fn no_flags_means_defaults() {
    let args = Args::try_parse_from(["greed"]).unwrap();
    assert_eq!(args.config().unwrap(), Config::default());
  }

  #[test]
  fn invalid_flags_are_rejected() {
    let args = Args::try_parse_from(["greed", "--rows", "0"]).unwrap();
    assert!(matches!(
      args.config(),
      Err(ConfigError::NotPositive { key: "rows" })
    ));

    let args =
      Args::try_parse_from(["greed", "--score", "-3", "--seed", "11"]).unwrap();
    let config = args.config().unwrap();
    assert_eq!(config.score, -3);
    assert_eq!(config.seed, Some(11));
  }

  #[test]
  fn overflowing_sizes_are_rejected() {
    let max = u32::MAX.to_string();
    let args = Args::try_parse_from([
      "greed",
      "--columns",
      max.as_str(),
      "--cell-size",
      max.as_str(),
    ])
    .unwrap();
    assert!(matches!(
      args.config(),
      Err(ConfigError::TooLarge { key: "columns", .. })
    ));
  }
}
