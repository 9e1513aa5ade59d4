use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use studiobook_db::schema::initialize_database;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();
    tracing_subscriber::fmt().init();

    // File storage needs no schema, so a database URL is mandatory here
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| eyre!("DATABASE_URL must be set to initialize the booking store schema"))?;

    tracing::info!("Connecting to database...");
    let db_pool = studiobook_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    Ok(())
}
