//! Application setup and initialization.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use fileforge_core::Config;
use fileforge_storage::ScratchStorage;

use crate::state::AppState;

/// Initialize the entire application: validate configuration, prepare the
/// scratch directories, build state and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let scratch = ScratchStorage::new(&config.upload_dir, &config.output_dir)
        .await
        .context("Failed to prepare scratch directories")?;

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        output_dir = %config.output_dir.display(),
        "Scratch directories ready"
    );

    let state = Arc::new(AppState::new(config.clone(), scratch));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
