use crate::commands::{
    run_browse, run_criteria, run_score, run_search, BrowseArgs, CriteriaArgs, ScoreArgs,
    SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use reelscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ReelScore",
    about = "Serve the ReelScore API or rate movies from the command line",
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
    /// Print the rating questions asked for a genre
    Criteria(CriteriaArgs),
    /// Compute an offline score card from id=value answers
    Score(ScoreArgs),
    /// Load popular movies through the relay and print the genre shelves
    Browse(BrowseArgs),
    /// Search movie titles through the relay with the configured debounce
    Search(SearchArgs),
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
        Command::Criteria(args) => run_criteria(args),
        Command::Score(args) => run_score(args),
        Command::Browse(args) => run_browse(args).await,
        Command::Search(args) => run_search(args).await,
    }
}
