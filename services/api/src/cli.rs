use crate::search::{run_saved, run_search, SavedCommand, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pg_finder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PG Finder",
    about = "Search paying-guest listings and serve the listing API",
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
    /// Filter and sort the catalog using a listing query string
    Search(SearchArgs),
    /// Inspect or change the saved listings
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
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
        Command::Search(args) => run_search(args),
        Command::Saved { command } => run_saved(command),
    }
}
