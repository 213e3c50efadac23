use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotkeeper_api::config::ApiConfig;
use slotkeeper_store::create_pool;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // The reference backend keeps everything in memory
    let store = create_pool();

    // Start API server
    slotkeeper_api::start_server(config, store).await?;

    Ok(())
}
