mod advice;
mod cli;
mod infra;
mod routes;
mod server;

use visa_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
