//! `wares-probe` — standalone connectivity probe.
//!
//! Pings the document store, reports the server version, lists database
//! names, and performs a throwaway insert-then-delete in a scratch
//! collection. Prints human-readable progress; the exit code is the only
//! machine-readable result.

use std::process::ExitCode;
use std::time::Duration;

use mongodb::bson::{DateTime, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use waresd::config::Config;

/// The probe should answer fast; a short server-selection window beats
/// the daemon's default.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::load()?;

    println!("probing {} ...", config.store.uri);
    match probe(&config.store.uri).await {
        Ok(()) => {
            println!("document store reachable");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("probe failed: {err:#}");
            println!("troubleshooting:");
            println!("  1. check that the MongoDB server is running");
            println!("  2. check the connection string (WARES_MONGODB_URI or wares.toml)");
            println!("  3. check that port 27017 is reachable");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn probe(uri: &str) -> anyhow::Result<()> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("wares-probe".to_string());
    options.server_selection_timeout = Some(PROBE_TIMEOUT);

    let client = Client::with_options(options)?;
    let admin = client.database("admin");

    admin.run_command(doc! { "ping": 1 }).await?;
    println!("ping ok");

    let info = admin.run_command(doc! { "buildInfo": 1 }).await?;
    if let Ok(version) = info.get_str("version") {
        println!("server version: {version}");
    }

    let names = client.list_database_names().await?;
    println!("databases: {}", names.join(", "));

    // Throwaway round trip through a scratch collection.
    let scratch: Collection<Document> = client
        .database("test_connection_db")
        .collection("test_collection");
    let inserted = scratch
        .insert_one(doc! { "test": "connection", "at": DateTime::now() })
        .await?;
    println!("test insert ok: {}", inserted.inserted_id);

    scratch
        .delete_one(doc! { "_id": inserted.inserted_id.clone() })
        .await?;
    println!("test document removed");

    client.shutdown().await;
    Ok(())
}
