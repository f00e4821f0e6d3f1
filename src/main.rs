use std::{env, process};

use colored::Colorize;
use storagetool::cli::{BasicTerm, Term};
use storagetool::commands::build_app;
use storagetool::storage::FileInspector;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    setup_logging();

    let inspector = FileInspector::new();
    let app = match build_app(&inspector) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            process::exit(e.exit_code());
        }
    };

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let mut term = BasicTerm::stdio();
    let code = app.run(&mut term, &args);
    term.out().flush().ok();
    tracing::debug!("exit code: {}", code);
    process::exit(code);
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn).
fn setup_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // Keep stdout clean for dump data
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
