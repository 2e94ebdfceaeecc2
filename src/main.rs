//! mortydex binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use mortydex::{app, args, theme};

struct MortydexTimer;

impl tracing_subscriber::fmt::time::FormatTime for MortydexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&mortydex::util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/mortydex/logs/mortydex.log`.
///
/// Inputs:
/// - `level`: Default filter directive used when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("mortydex.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(MortydexTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(MortydexTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let mut settings = theme::settings();
    if let Some(url) = &args.base_url {
        settings.base_url.clone_from(url);
    }

    if args.search {
        let code = args::handle_search(args.initial_filters(), args.pages, &settings).await;
        std::process::exit(code);
    }

    tracing::info!(base_url = %settings.base_url, "mortydex starting");
    if let Err(err) = app::run(args.initial_filters(), settings).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("mortydex: {err}");
    }
    tracing::info!("mortydex exited");
}
