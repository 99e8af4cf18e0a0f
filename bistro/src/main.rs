use anyhow::Context;
use bistro::{Config, Restaurant, Session, init_logger_with_file};
use std::io;

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env) and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging (stderr, optional rotating files)
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    tracing::info!(environment = %config.environment, "Bistro session starting...");

    // 3. House setup
    let restaurant =
        Restaurant::house(&config.manager_name).context("failed to set up the restaurant")?;

    // 4. One session over stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(restaurant, stdin.lock(), stdout.lock(), config);

    let outcome = session.run()?;
    tracing::info!(?outcome, "Session finished");

    Ok(())
}
