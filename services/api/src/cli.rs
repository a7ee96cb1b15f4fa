use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::demo::{run_dashboard, run_demo, DashboardArgs, DemoArgs};
use crate::server;
use care_pulse::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Care Pulse",
    about = "Collect patient courtesy ratings and serve the daily satisfaction dashboard",
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
    /// Render the dashboard once from an archived CSV export
    Dashboard(DashboardArgs),
    /// Run a scripted CLI walkthrough of intake and reporting
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the store from a survey archive CSV before serving
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo(args) => run_demo(args),
    }
}
