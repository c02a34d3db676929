//! MongoDB client lifecycle.
//!
//! One [`MongoStore`] is created per process at startup and disconnected
//! at shutdown. Connecting verifies liveness with a `ping`; a failed
//! connection yields a *disconnected* store rather than an error, so the
//! rest of the process can start degraded and report the state through
//! the health endpoint.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use wares_app::ports::StoreStatus;
use wares_domain::error::WaresError;

use crate::error::StorageError;

/// Configuration for the MongoDB storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// How long server selection may take before an operation fails.
    pub server_selection_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "wares".to_string(),
            server_selection_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Connect to the store described by this configuration.
    ///
    /// Never fails: connection or ping errors are logged and produce a
    /// disconnected [`MongoStore`] that reports `is_connected() == false`
    /// and answers every operation with [`WaresError::Unavailable`].
    pub async fn connect(self) -> MongoStore {
        match MongoStore::establish(&self).await {
            Ok(store) => {
                tracing::info!(database = %self.database, "connected to document store");
                store
            }
            Err(err) => {
                tracing::error!(error = %err, uri = %self.uri, "failed to connect to document store");
                MongoStore::disconnected()
            }
        }
    }
}

/// Handle to the document store, shared across the process.
///
/// Cloning is cheap: the underlying driver client is reference-counted.
/// The connected/disconnected state is fixed at construction.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Option<Client>,
    database: Option<Database>,
}

impl MongoStore {
    async fn establish(config: &Config) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(config.uri.as_str()).await?;
        options.app_name = Some("wares".to_string());
        options.server_selection_timeout = Some(config.server_selection_timeout);
        options.connect_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;

        // Liveness check: client construction alone does not touch the
        // network.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        let database = client.database(&config.database);
        Ok(Self {
            client: Some(client),
            database: Some(database),
        })
    }

    /// A handle that answers every operation with
    /// [`WaresError::Unavailable`].
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            client: None,
            database: None,
        }
    }

    /// Whether the connection was established at startup.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.database.is_some()
    }

    /// Borrow the underlying client, if connected.
    #[must_use]
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    /// Borrow the database handle.
    ///
    /// # Errors
    ///
    /// Returns [`WaresError::Unavailable`] when the store is
    /// disconnected.
    pub fn database(&self) -> Result<&Database, WaresError> {
        self.database
            .as_ref()
            .ok_or_else(|| WaresError::Unavailable("not connected".to_string()))
    }

    /// Typed handle to a named collection.
    ///
    /// # Errors
    ///
    /// Returns [`WaresError::Unavailable`] when the store is
    /// disconnected.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Result<Collection<T>, WaresError> {
        Ok(self.database()?.collection(name))
    }

    /// Release the connection. Safe to call when already disconnected.
    pub async fn disconnect(&mut self) {
        self.database = None;
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            tracing::info!("document store connection closed");
        }
    }
}

impl StoreStatus for MongoStore {
    fn is_connected(&self) -> bool {
        self.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Document;

    #[test]
    fn should_default_to_local_endpoint_with_bounded_timeouts() {
        let config = Config::default();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "wares");
        assert_eq!(config.server_selection_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_report_disconnected_store_as_unavailable() {
        let store = MongoStore::disconnected();
        assert!(!store.is_connected());
        assert!(store.client().is_none());

        let result = store.database();
        assert!(matches!(result, Err(WaresError::Unavailable(_))));

        let result = store.collection::<Document>("users");
        assert!(matches!(result, Err(WaresError::Unavailable(_))));
    }

    #[tokio::test]
    async fn should_allow_disconnect_when_already_disconnected() {
        let mut store = MongoStore::disconnected();
        store.disconnect().await;
        store.disconnect().await;
        assert!(!store.is_connected());
    }
}
