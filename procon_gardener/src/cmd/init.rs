use crate::modules::config::ConfigStore;
use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    let store = ConfigStore::locate()?;
    store
        .init(true)
        .with_context(|| format!("failed to initialize {}", store.file().display()))?;

    Ok(())
}
