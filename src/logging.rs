//! Structured logging setup for the command-line tool

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants as C;

/// Initialize tracing on stderr
///
/// `NOTE_CALENDAR_LOG` (or `RUST_LOG`) overrides the level picked from the
/// command line.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level.to_string(),
        (true, None) => "debug".to_string(),
        (false, None) => "warn".to_string(),
    };

    let filter = EnvFilter::try_from_env(C::ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Scope a bare level to this crate; full directives pass through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("note_calendar={}", level)
    }
}
