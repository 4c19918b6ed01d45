use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bidrank::input::load_snapshot;
use bidrank::model::weights::Priority;
use bidrank::pipeline::rank;
use bidrank::report::{ReportMode, write_reports};

#[derive(Debug, Parser)]
#[command(name = "bidrank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the bids of one project snapshot.
    Rank {
        /// JSON snapshot holding the project, its bids, and the bidders'
        /// reputation fields.
        #[arg(long)]
        input: PathBuf,

        /// Scoring emphasis: price, time, rating, or balanced.
        #[arg(long, default_value = "balanced")]
        priority: String,

        /// Output directory; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        mode: ReportMode,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Rank {
            input,
            priority,
            out,
            mode,
        } => {
            let snapshot = load_snapshot(&input)?;
            let directory = snapshot.directory();
            let priority = Priority::parse(&priority);

            let result = rank(&snapshot.project, &snapshot.bids, &directory, priority);
            info!(
                n_bids = snapshot.bids.len(),
                n_ranked = result.ranked_bids.len(),
                ?priority,
                "bids ranked"
            );

            write_reports(&result, out.as_deref(), mode)?;
        }
    }
    Ok(())
}
