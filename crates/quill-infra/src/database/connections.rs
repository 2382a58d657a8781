use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub database: String,
    pub max_pool_size: u32,
}

/// Handle to the document store.
///
/// The driver connects lazily: an unreachable store does not fail `init`,
/// it fails the first operation that needs a connection.
pub struct Store {
    database: mongodb::Database,
}

impl Store {
    /// Build the store client from configuration.
    pub async fn init(config: &StoreConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing document store client...");

        let mut options = ClientOptions::parse(&config.url).await?;
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(Duration::from_secs(10));

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        tracing::info!(
            database = %config.database,
            "Document store client ready (pool: {})",
            config.max_pool_size
        );

        Ok(Self { database })
    }

    /// Get a typed handle to a collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}
