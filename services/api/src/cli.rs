use crate::demo::{run_demo, run_trust_score, DemoArgs, TrustScoreArgs};
use crate::import::{run_import, ImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use studworks::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Student Works Marketplace",
    about = "Run the marketplace API and its catalog import tooling from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a cloud-folder listing export and emit SQL inserts
    Import(ImportArgs),
    /// Inspect the trust scoring rubric
    Trust {
        #[command(subcommand)]
        command: TrustCommand,
    },
    /// Run an end-to-end CLI demo covering import, scoring, and purchases
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TrustCommand {
    /// Score a hypothetical work and print the component breakdown
    Score(TrustScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Import(args) => run_import(args),
        Command::Trust {
            command: TrustCommand::Score(args),
        } => run_trust_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
