use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings for one invocation. Nothing is read from disk; the
/// command line and `RUST_LOG` are the only inputs.
pub struct Config {
    pub log_filter: String,
}

impl Config {
    pub fn load(verbose: bool) -> Self {
        Self::from_parts(verbose, std::env::var("RUST_LOG").ok())
    }

    fn from_parts(verbose: bool, rust_log: Option<String>) -> Self {
        let log_filter = if verbose {
            "debug".to_string()
        } else {
            rust_log
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };
        Config { log_filter }
    }

    /// Log to stderr so the terminal dialogue on stdout stays clean.
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(&self.log_filter))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}
