//! Single-shot capture of Apple Reminders into daily notes.

use remlog::config;
use remlog::run;
use remlog::source::default_source;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    std::process::exit(run_capture());
}

fn run_capture() -> i32 {
    let Some(config_dir) = dirs::config_dir().map(|dir| dir.join("remlog")) else {
        tracing::error!("could not determine a configuration directory");
        return 1;
    };

    let config = match config::load_or_create_config(&config_dir) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("{error}");
            return 1;
        }
    };

    let source = default_source();
    let report = run::run(
        source.as_ref(),
        &config,
        &config_dir.join("state"),
        chrono::Local::now(),
    );

    tracing::info!(
        "complete: {} succeeded, {} failed, {} skipped",
        report.succeeded,
        report.failed,
        report.skipped
    );
    if report.is_success() {
        0
    } else {
        1
    }
}
