mod assess;
mod cli;
mod demo;
mod infra;
mod render;
mod routes;
mod server;

use wound_care::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
