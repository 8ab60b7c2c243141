//! Log output for the command-line tools.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MIRAE_LOG";

/// Picks the filter directive: `debug` when verbose, else `MIRAE_LOG`, else `info`.
#[must_use]
pub fn filter_directive(verbose: bool, env: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|value| !value.trim().is_empty())
        .unwrap_or("info")
        .to_string()
}

/// Installs a stderr fmt subscriber. Later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbose, env.as_deref());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins() {
        assert_eq!(filter_directive(true, Some("warn")), "debug");
    }

    #[test]
    fn env_then_default() {
        assert_eq!(filter_directive(false, Some("client=trace")), "client=trace");
        assert_eq!(filter_directive(false, Some("  ")), "info");
        assert_eq!(filter_directive(false, None), "info");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }
}
