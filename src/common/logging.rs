//! Logging and tracing configuration
//!
//! Logs go to stderr so stdout carries only the sequence.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{Error, Result};

/// Pick the filter directives for a verbosity count.
///
/// Zero falls back to the configured directives.
pub fn directives(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "fibonacci=info,warn".to_string(),
        2 => "fibonacci=debug,warn".to_string(),
        _ => "fibonacci=trace,info".to_string(),
    }
}

/// Initialize tracing for the CLI (stderr logging)
///
/// `RUST_LOG` wins when set and valid. Otherwise `-v` flags, then the
/// config file, whose directives must parse.
pub fn init_cli(verbose: u8, configured: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(verbose, configured))
            .map_err(|e| Error::Config(format!("invalid logging filter: {}", e)))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_uses_configured() {
        assert_eq!(directives(0, "fibonacci=error"), "fibonacci=error");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(directives(1, "x"), "fibonacci=info,warn");
        assert_eq!(directives(2, "x"), "fibonacci=debug,warn");
        assert_eq!(directives(3, "x"), "fibonacci=trace,info");
        assert_eq!(directives(9, "x"), "fibonacci=trace,info");
    }
}
