use crate::assess::{run_assess, run_matrix, AssessArgs, MatrixArgs};
use crate::server;
use crate::terminal::run_wizard;
use clap::{Args, Parser, Subcommand};
use hiring_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Bilingual Hiring Risk",
    about = "Assess bilingual hiring risk from the command line or over HTTP",
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
    /// Walk through the questionnaire interactively
    Wizard,
    /// Score a single answer set given as flags
    Assess(AssessArgs),
    /// Export the score of every answer combination as CSV
    Matrix(MatrixArgs),
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
        Command::Wizard => run_wizard(),
        Command::Assess(args) => run_assess(args),
        Command::Matrix(args) => run_matrix(args),
    }
}
