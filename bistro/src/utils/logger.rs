//! Logging Infrastructure
//!
//! Diagnostics never share stdout with the console session:
//! - Console layer on stderr (pretty or JSON)
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent audit logs for bookings, bills and payments

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Days an application log file is kept
const APP_LOG_RETENTION_DAYS: i64 = 14;

/// Clean up old application log files (older than 14 days)
///
/// Returns the number of files removed.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let mut removed = 0;

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(removed);
    }

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // Match app.YYYY-MM-DD (tracing-appender) or app-YYYY-MM-DD.log
        let date_part = name
            .strip_prefix("app.")
            .or_else(|| name.strip_prefix("app-").and_then(|d| d.strip_suffix(".log")));

        if let Some(date_part) = date_part
            && let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(midnight) = naive_date.and_hms_opt(0, 0, 0)
            && let Some(local_datetime) = Local.from_local_datetime(&midnight).single()
            && local_datetime < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is unset (e.g. "warn", "debug")
/// * `json_format` - JSON console output (production) instead of pretty text
/// * `log_dir` - Optional directory for rotating file logs
///
/// # Examples
/// ```no_run
/// // Console only
/// bistro::init_logger_with_file("debug", false, None)?;
///
/// // Console + files
/// bistro::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let file_layers = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            let audit_log_dir = log_dir.join("audit");

            fs::create_dir_all(&app_log_dir)?;
            fs::create_dir_all(&audit_log_dir)?;

            // Only log to app file if target is NOT "audit"
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            let app_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() != "audit"
                }));

            // Permanent audit logs (never deleted)
            let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_log_dir, "audit");
            let audit_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(audit_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() == "audit"
                }));

            Some(app_layer.and_then(audit_layer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layers)
        .try_init()?;

    if let Some(dir) = log_dir {
        cleanup_old_logs(Path::new(dir))?;
    }

    Ok(())
}

/// Audit log helper - records business operations
///
/// Audit records go to the `audit` target and, when a log directory is
/// configured, to the permanent `audit.YYYY-MM-DD` files.
///
/// # Examples
/// ```ignore
/// audit_log!("customer", "book", "table:1");
/// audit_log!("customer", "pay", "table:1", "card 28.51");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($actor:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            actor = $actor,
            action = $action,
            resource = %$resource,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($actor:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            actor = $actor,
            action = $action,
            resource = %$resource,
            details = %$details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_removes_only_expired_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        fs::write(app_dir.join("app.2001-01-01"), "old").unwrap();
        fs::write(app_dir.join("app-2001-01-02.log"), "old").unwrap();
        fs::write(app_dir.join(format!("app.{today}")), "fresh").unwrap();
        fs::write(app_dir.join("notes.txt"), "keep").unwrap();

        let removed = cleanup_old_logs(dir.path()).unwrap();

        assert_eq!(removed, 2);
        assert!(!app_dir.join("app.2001-01-01").exists());
        assert!(!app_dir.join("app-2001-01-02.log").exists());
        assert!(app_dir.join(format!("app.{today}")).exists());
        assert!(app_dir.join("notes.txt").exists());
    }

    #[test]
    fn cleanup_without_app_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
    }
}
