//! Command-line interface for the bundle scanner.
//!
//! Prints every resigning candidate in an app bundle, deepest paths first,
//! followed by nested app bundles and finally the bundle itself. Stdout
//! carries only the path list; validation failures exit with status 1 and
//! no output. Diagnostics are opt-in via `RUST_LOG`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use bundlescan::{BundleScanner, FileCommand, ScanReport};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bundlescan")]
#[command(version)]
#[command(about = "List Mach-O resigning candidates in an app bundle, deepest paths first")]
struct Cli {
    /// App bundle to scan (<name>.app)
    bundle: PathBuf,

    /// Binary type detection strategy
    #[arg(long, value_enum, default_value = "magic")]
    detector: Detector,

    /// Program invoked per file when --detector=file
    #[arg(long, default_value = "file")]
    file_command: String,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Detector {
    /// Read the Mach-O magic number natively
    Magic,
    /// Run a `file`-like tool and look for "Mach-O" in its output
    File,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            process::exit(0);
        }
        // Wrong arguments terminate silently; stdout stays reserved for paths.
        Err(_) => process::exit(1),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let report = match scan(&cli) {
        Ok(report) => report,
        Err(err) => {
            debug!(error = %err, "scan failed");
            process::exit(1);
        }
    };

    if print_report(&report).is_err() {
        process::exit(1);
    }
}

fn scan(cli: &Cli) -> bundlescan::Result<ScanReport> {
    match cli.detector {
        Detector::Magic => BundleScanner::new().scan(&cli.bundle),
        Detector::File => {
            BundleScanner::with_detector(FileCommand::new(&cli.file_command)).scan(&cli.bundle)
        }
    }
}

fn print_report(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in report.ordered_paths() {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}
