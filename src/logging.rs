//! Logger setup.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use env_logger::Builder;
use env_logger::Env;
use env_logger::Target;
use log::LevelFilter;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages are printed; otherwise only info
/// and above. `RUST_LOG` overrides either. If `log_file` is given, output goes
/// there instead of stderr, which is what you want once the terminal is in raw
/// mode.
///
/// Only the first call does anything; later calls return `Ok(())` without
/// touching `log_file`, so a live log is never truncated.
pub fn init(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
  if INSTALLED.swap(true, Ordering::SeqCst) {
    return Ok(());
  }

  let level = if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };

  let env = Env::default().default_filter_or(level.to_string());
  let mut builder = Builder::from_env(env);
  if let Some(path) = log_file {
    match File::create(path) {
      Ok(file) => {
        builder.target(Target::Pipe(Box::new(file)));
      }
      Err(e) => {
        INSTALLED.store(false, Ordering::SeqCst);
        return Err(e);
      }
    }
  }

  // Fails if some other logger got there first; theirs stays in charge.
  let _ = builder.try_init();
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn later_calls_leave_the_log_file_alone() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("live.log");
    fs::write(&path, "still here\n").unwrap();

    init(false, None).unwrap();
    init(true, Some(&path)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "still here\n");
  }
}
