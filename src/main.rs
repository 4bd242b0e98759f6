#![warn(clippy::all)]
use quiz_shelf::{config, run, setup_store};

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    dotenv::dotenv().ok();

    let config = config::Config::new()?;
    let store = setup_store(&config);

    tracing::info!(
        "serving quizzes from {} on port {}",
        config.storage_root,
        config.port
    );
    run(config, store).await;

    Ok(())
}
