use crate::commands::{
    run_batch, run_classify, run_features, run_sample, BatchArgs, ClassifyArgs, SampleArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use exonet::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "exonet",
    about = "Classify exoplanet transit candidates and explain the verdict",
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
    /// Classify a single candidate and print the ranked explanation
    Classify(ClassifyArgs),
    /// Classify every row of a candidate CSV export
    Batch(BatchArgs),
    /// List the input-field catalog
    Features,
    /// Print a demo candidate from the sample pool
    Sample(SampleArgs),
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
        Command::Classify(args) => run_classify(args),
        Command::Batch(args) => run_batch(args),
        Command::Features => run_features(),
        Command::Sample(args) => run_sample(args),
    }
}
