use crate::modules::{
    config::ConfigStore,
    gardener::{Endpoints, Gardener},
};
use anyhow::{Context, Result};

pub async fn run() -> Result<()> {
    let store = ConfigStore::locate()?;
    let config = store.load_validated().with_context(|| {
        let message = format!("failed to load config from {}", store.file().display());
        tracing::error!(message);
        message
    })?;

    let mut gardener = Gardener::new(config.atcoder, Endpoints::default())?;
    let archived = gardener
        .run()
        .await
        .context("failed to archive AC submissions")?;

    tracing::info!("Done. {} submissions were newly archived.", archived);
    Ok(())
}
