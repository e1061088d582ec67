//! Error types.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop a game early.
#[derive(Debug, Error)]
pub enum GameError {
  /// A group that must always be populated during play was empty.
  #[error("the cast has no actor in group `{group}`")]
  MissingActor { group: String },

  /// The terminal, or some other I/O resource, failed.
  #[error("terminal error: {0}")]
  Terminal(#[from] io::Error),

  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl GameError {
  /// Creates a [`GameError::MissingActor`] for `group`.
  pub fn missing(group: &str) -> Self {
    Self::MissingActor {
      group: group.to_string(),
    }
  }
}

/// A `Result` whose error is a [`GameError`].
pub type Result<T, E = GameError> = std::result::Result<T, E>;
