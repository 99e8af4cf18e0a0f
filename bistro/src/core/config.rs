/// Order lines accepted in one session unless overridden
pub const DEFAULT_MAX_ORDER_LINES: usize = 10;

/// Session configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | warn | tracing filter when RUST_LOG is unset |
/// | LOG_JSON | true in production | JSON console logs |
/// | LOG_DIR | (unset) | directory for rotating log files |
/// | MAX_ORDER_LINES | 10 | order lines accepted per session |
/// | MANAGER_NAME | Mr. John | manager shown on the dashboard |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug LOG_DIR=./logs cargo run -p bistro
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Never below 1
    pub max_order_lines: usize,
    pub manager_name: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unset or unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".into()),
            log_json: false,
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            max_order_lines: lookup("MAX_ORDER_LINES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ORDER_LINES)
                .max(1),
            manager_name: lookup("MANAGER_NAME").unwrap_or_else(|| "Mr. John".into()),
        };

        // JSON console logs unless explicitly disabled in production
        config.log_json = lookup("LOG_JSON")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| config.is_production());
        config
    }

    /// Defaults with a custom order cap
    ///
    /// Used by tests.
    pub fn with_overrides(max_order_lines: usize) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.max_order_lines = max_order_lines.max(1);
        config
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
