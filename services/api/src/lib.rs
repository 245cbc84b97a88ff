mod cli;
mod infra;
mod routes;
mod search;
mod server;

use pg_finder::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
