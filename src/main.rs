use hello_api::{config::Config, error::AppError, run_app};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    run_app(Config::default()).await
}
