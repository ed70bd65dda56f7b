use clap::Parser;
use folio_check::check_content_dir;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// folio-check: validate site content against the collection schemas.
#[derive(Parser)]
#[command(name = "folio-check")]
struct Args {
    /// Content root containing one directory per collection
    /// (`illustrations/`, `projects/`).
    #[arg(long, default_value = "content", env = "FOLIO_CONTENT_DIR")]
    content_dir: PathBuf,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    configure_logging();
    let args = Args::parse();

    let report = match check_content_dir(&args.content_dir) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for failure in &report.failures {
        error!(
            "{}: {:?}: {}",
            failure.collection.dir_name(),
            failure.path,
            failure.error
        );
    }

    if report.is_ok() {
        info!("{} entries valid", report.checked);
        ExitCode::SUCCESS
    } else {
        error!(
            "{} of {} entries failed validation",
            report.failures.len(),
            report.checked
        );
        ExitCode::FAILURE
    }
}
