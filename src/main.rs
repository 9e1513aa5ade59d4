use color_eyre::eyre::Result;
use dotenv::dotenv;
use studiobook_api::config::ApiConfig;
use studiobook_core::catalog::StudioCatalog;
use studiobook_db::open_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    studiobook_api::init_tracing(config.log_level)?;

    // Load the studio dataset once for the lifetime of the process
    let catalog = StudioCatalog::load(&config.studios_data_path)?;

    // Open the booking ledger's backing store
    let store = open_store(&config.storage).await?;

    // Start API server
    studiobook_api::start_server(config, catalog, store).await?;

    Ok(())
}
