use crate::demo::{run_catalog_stats, run_demo, CatalogStatsArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use orientcam::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "OrientCam",
    about = "Run the OrientCam orientation service and its companion demos from the command line",
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
    /// Inspect a program-catalog export
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run an end-to-end terminal demo of the recommendation pipeline
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print aggregate statistics for a catalog CSV export
    Stats(CatalogStatsArgs),
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
        Command::Catalog {
            command: CatalogCommand::Stats(args),
        } => run_catalog_stats(args),
        Command::Demo(args) => run_demo(args),
    }
}
