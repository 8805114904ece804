use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

/// Initialize the tracing subscriber.
///
/// The shell runs on the alternate screen, so stdout/stderr are not usable
/// log sinks while it is up. With a log file, events go there; without one,
/// logging stays off. Safe to call multiple times; subsequent calls are
/// no-ops for the global subscriber.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_without_file_is_a_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn init_creates_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.log");
        init(Some(&path)).unwrap();
        assert!(path.exists());
    }
}
