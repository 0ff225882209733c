mod assess;
mod cli;
mod infra;
mod routes;
mod server;
mod terminal;

use hiring_risk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
