//! Log setup. Nothing is emitted unless CONFDIFF_LOG is set.
//!
//! `CONFDIFF_LOG` takes an `EnvFilter` directive such as `debug` or
//! `confdiff::core=trace`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "CONFDIFF_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error (print mode).
    Stderr,
    /// `confdiff.log` in the config directory (the TUI owns the terminal).
    File,
}

/// Install the global subscriber if CONFDIFF_LOG is set.
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init(target: LogTarget) -> std::io::Result<bool> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(false);
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File => {
            let path = log_file_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(true)
}

/// Log file used by the TUI.
pub fn log_file_path() -> std::path::PathBuf {
    crate::core::config_dir().join("confdiff.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn log_file_lives_in_config_dir() {
        let path = log_file_path();
        assert_eq!(path.file_name(), Some(Path::new("confdiff.log").as_os_str()));
        assert!(path.starts_with(crate::core::config_dir()));
    }
}
