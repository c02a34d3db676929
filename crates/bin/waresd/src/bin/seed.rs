//! `wares-seed` — one-shot seeding tool.
//!
//! Writes a handful of sample records as individual JSON files into the
//! load directory, bulk-loads them into the collection, and prints an
//! upload report plus a summary of the collection contents.

use std::path::Path;
use std::process::ExitCode;

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use wares_adapter_storage_mongodb::{BulkLoader, MongoStore};
use waresd::config::Config;

const SAMPLE_RECORDS: [(i64, &str, f64); 4] = [
    (1, "Laptop", 1200.0),
    (2, "Mouse", 25.5),
    (3, "Monitor", 350.99),
    (4, "Keyboard", 75.0),
];

/// How many documents the collection summary prints at most.
const SUMMARY_LIMIT: i64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let dir = Path::new(&config.load.directory);
    write_sample_files(dir)?;
    println!(
        "wrote {} sample files to {}/",
        SAMPLE_RECORDS.len(),
        dir.display()
    );

    println!("connecting to {} ...", config.store.uri);
    let mut store = config.store_config().connect().await;
    if !store.is_connected() {
        println!("connection failed — check that the MongoDB server is running");
        return Ok(ExitCode::FAILURE);
    }

    let report = BulkLoader::new(store.clone())
        .load_directory(dir, &config.store.collection)
        .await?;
    println!(
        "upload finished: {} file(s) succeeded, {} failed",
        report.uploaded, report.failed
    );

    show_collection(&store, &config.store.collection).await?;
    store.disconnect().await;

    if report.succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        println!("no file uploaded");
        Ok(ExitCode::FAILURE)
    }
}

/// Write each sample record to its own file, one JSON object per file
/// with a trailing newline.
fn write_sample_files(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    for (id, product, price) in SAMPLE_RECORDS {
        let record = json!({ "id": id, "product": product, "price": price });
        let path = dir.join(format!("user_{id}.json"));
        std::fs::write(&path, serde_json::to_string(&record)? + "\n")?;
    }
    Ok(())
}

async fn show_collection(store: &MongoStore, collection: &str) -> anyhow::Result<()> {
    let coll: Collection<Document> = store.collection(collection)?;

    let count = coll.count_documents(doc! {}).await?;
    println!("collection '{collection}' now holds {count} document(s)");

    let mut cursor = coll.find(doc! {}).limit(SUMMARY_LIMIT).await?;
    let mut index = 0;
    while let Some(document) = cursor.try_next().await? {
        index += 1;
        println!("  [{index}] {document}");
    }
    Ok(())
}
