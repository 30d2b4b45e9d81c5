mod cli;
mod demo;
mod import;
mod infra;
mod routes;
mod server;

use studworks::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
