//! Remiro maintenance binary.
//!
//! Loads configuration, opens the filesystem store, and prints the
//! roster of registered users.

use remiro::adapters::FsProfileStore;
use remiro::config::AppConfig;
use remiro::ports::ProfileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&config.log.filter)?)
        .init();

    let store = FsProfileStore::new(&config.storage.data_dir);
    let profiles = store.list_profiles().await?;

    if profiles.is_empty() {
        println!(
            "No registered users under {}",
            config.storage.data_dir.display()
        );
        return Ok(());
    }

    println!("Registered users ({}):", profiles.len());
    for record in profiles {
        println!(
            "  {}  {}  created {}",
            record.id,
            record.name,
            record.created_at.as_datetime().format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
