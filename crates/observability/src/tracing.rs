//! Subscriber setup for the review services.

use tracing_subscriber::EnvFilter;

/// Verbosity used when `RUST_LOG` is unset: workflow decisions from our own
/// crates, warnings from everything else.
pub const DEFAULT_FILTER: &str = "warn,campuscoffee_domain=info,campuscoffee_infra=info";

/// Environment variable selecting the output format (`json` or `text`).
pub const FORMAT_ENV: &str = "CAMPUSCOFFEE_LOG_FORMAT";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    #[default]
    Json,
    /// Compact human-readable lines, for local runs.
    Text,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("text") | Some("compact") => Self::Text,
            _ => Self::Json,
        }
    }
}

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to [`DEFAULT_FILTER`]) and
/// the format from `CAMPUSCOFFEE_LOG_FORMAT`. Only the first call installs
/// anything.
pub fn init() {
    let format = LogFormat::parse(std::env::var(FORMAT_ENV).ok().as_deref());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let _ = match format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Text => builder.compact().with_target(false).try_init(),
    };
}
