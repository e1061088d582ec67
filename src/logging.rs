//! Log output.
//!
//! The game owns the whole terminal while it runs, so logs can only go to a
//! file. Nothing is installed unless a log file is asked for.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a global subscriber writing plain-text logs to `path`, truncating
/// it first.
pub fn init(path: &Path) -> io::Result<()> {
  let file = File::create(path)?;
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
