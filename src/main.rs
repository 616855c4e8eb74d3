use track_splitter::config::{init_logging, Config};
use track_splitter::error::Result;
use track_splitter::runner::split_file;
use track_splitter::splitter::SplitOptions;

use clap::{Args, Parser};
use log::info;

use std::path::PathBuf;

#[derive(Clone, Args)]
struct ReportOutput {
    /// Write a JSON summary of the segments to this file
    #[arg(short, long)]
    report: Option<PathBuf>,
    /// Pretty print the summary
    #[arg(long)]
    pretty: bool,
}

/// Split a GPX track into one track per day, using waypoints as boundaries.
#[derive(Parser)]
#[command(version)]
struct ArgParser {
    #[command(flatten)]
    config: Config,
    #[command(flatten)]
    options: SplitOptions,
    #[command(flatten)]
    report: ReportOutput,
    /// GPX file to split
    input: PathBuf,
    /// Anything after the input file is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = ArgParser::parse();
    init_logging(&args.config);

    let report = split_file(&args.input, &args.options).await?;
    for file in &report.files {
        info!("wrote '{}'", file.display());
    }

    if let Some(path) = &args.report.report {
        report.save(path, args.report.pretty)?;
    }

    Ok(())
}
