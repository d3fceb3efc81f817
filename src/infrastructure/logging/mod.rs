// Logging module - Logging infrastructure
use crate::domain::error::{HelpError, HelpResult};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Handle on the installed filter, used once the configuration is known
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    /// Switch to the configured level unless `--verbose` or `RUST_LOG` already chose one
    pub fn apply_level(&self, log_level: &str) -> HelpResult<()> {
        if self.pinned {
            return Ok(());
        }

        self.filter
            .reload(EnvFilter::default().add_directive(level_filter(log_level).into()))
            .map_err(|e| HelpError::Logging(format!("Failed to apply log level: {}", e)))?;

        tracing::debug!(level = log_level, "applied configured log level");
        Ok(())
    }

    /// Whether the level was fixed at startup
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

/// Initialize logging system.
///
/// Installed before any configuration is read so that config discovery
/// is logged too. Events go to stderr so rendered help on stdout stays
/// untouched. `verbose` forces debug output, `RUST_LOG` comes next, and
/// otherwise the level starts at `warn` until [`LogHandle::apply_level`].
pub fn init_logging(verbose: bool, ansi: bool) -> HelpResult<LogHandle> {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();

    let env_filter = if verbose {
        EnvFilter::default().add_directive(LevelFilter::DEBUG.into())
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };
    let (filter, handle) = reload::Layer::new(env_filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true),
        )
        .try_init()
        .map_err(|e| HelpError::Logging(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("logging system initialized");
    Ok(LogHandle {
        filter: handle,
        pinned: verbose || from_env,
    })
}

/// Map a configured level name, falling back to `warn`
fn level_filter(name: &str) -> LevelFilter {
    match name.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("info"), LevelFilter::INFO);
        assert_eq!(level_filter("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(level_filter("off"), LevelFilter::OFF);
        assert_eq!(level_filter("loud"), LevelFilter::WARN);
    }

    #[test]
    fn test_logging_init_once_then_reload() {
        // The only test in this binary that installs a global subscriber
        let handle = init_logging(true, false).unwrap();
        assert!(handle.is_pinned());
        assert!(handle.apply_level("info").is_ok());

        assert!(matches!(init_logging(false, false), Err(HelpError::Logging(_))));
    }
}
