use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const CRATE_TARGET: &str = "personnummer_check";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How the binaries set up logging. `RUST_LOG` still wins when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Level for this crate, one of [`LOG_LEVELS`].
    pub level: Option<String>,
    pub verbose: bool,
    pub json: bool,
}

impl LogSettings {
    pub fn cli(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Filter used when `RUST_LOG` is absent. An explicit level beats
    /// `verbose`; stdout is reserved for results so the quiet default is `warn`.
    pub fn default_directive(&self) -> String {
        let level = match self.level.as_deref().map(str::trim) {
            Some(level) if !level.is_empty() => level,
            _ if self.verbose => "debug",
            _ => "warn",
        };

        if self.verbose {
            format!("{}={},info", CRATE_TARGET, level)
        } else {
            format!("{}={}", CRATE_TARGET, level)
        }
    }
}

pub fn init_logger(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if settings.json {
        // one JSON object per line, for batch runs collected by a log shipper
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(&LogSettings::cli(verbose));
}
