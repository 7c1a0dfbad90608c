use crate::demo::{run_demo, run_listing_search, DemoArgs, ListingSearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use renthub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RentHub",
    about = "Demonstrate and run the RentHub rental marketplace service from the command line",
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
    /// Browse the listing catalogue
    Listings {
        #[command(subcommand)]
        command: ListingsCommand,
    },
    /// Run an end-to-end CLI demo covering login, a full application run,
    /// and a tenant dashboard snapshot
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ListingsCommand {
    /// Search and filter the sample catalogue
    Search(ListingSearchArgs),
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
        Command::Listings {
            command: ListingsCommand::Search(args),
        } => run_listing_search(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
