//! CLI entry point for the toppers tool.
//!
//! Reads a CSV of student test scores, grades every student and reports the
//! overall topper and the topper of each university.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use toppers::analyzers::analyzer::build_report;
use toppers::output::{render_json, render_text, write_graded_csv};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "toppers")]
#[command(about = "Grade student test scores and find the toppers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the overall topper and the topper of each university
    Report {
        /// CSV file of student scores (first line is a header)
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = Format::Text, env = "TOPPERS_FORMAT")]
        format: Format,
    },
    /// Write every graded student to a CSV file
    Export {
        /// CSV file of student scores (first line is a header)
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// CSV file to write graded students to
        #[arg(short, long, default_value = "graded.csv")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/toppers.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("toppers.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { source, format } => {
            let report = build_report(&source)?;
            let rendered = match format {
                Format::Text => render_text(&report),
                Format::Json => render_json(&report)?,
            };
            print!("{rendered}");
            if matches!(format, Format::Json) {
                println!();
            }
        }
        Commands::Export { source, output } => {
            let report = build_report(&source)?;
            write_graded_csv(&output, report.students())?;
            info!(
                output = %output.display(),
                students = report.student_count(),
                "Export finished"
            );
        }
    }

    Ok(())
}
