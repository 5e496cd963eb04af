//! Application state.

use std::sync::Arc;
use std::time::Duration;

use fileforge_core::{AppError, Config};
use fileforge_processing::ConvertError;
use fileforge_storage::ScratchStorage;
use tokio::sync::Semaphore;

/// Shared state for all handlers: configuration, scratch storage, and the
/// permit pool bounding concurrently running conversions.
pub struct AppState {
    pub config: Config,
    pub scratch: ScratchStorage,
    conversion_permits: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: Config, scratch: ScratchStorage) -> Self {
        let permits = config.max_concurrent_conversions;
        AppState {
            config,
            scratch,
            conversion_permits: Arc::new(Semaphore::new(permits)),
        }
    }

    /// Dispatch a blocking conversion to the worker pool.
    ///
    /// The call runs on the blocking thread pool under a semaphore permit and
    /// is raced against the configured timeout. A timed-out conversion cannot
    /// be interrupted mid-call; it keeps its permit until it returns and the
    /// result is discarded.
    pub async fn run_conversion<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> Result<T, ConvertError> + Send + 'static,
        T: Send + 'static,
    {
        let permit = self
            .conversion_permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| AppError::Internal("conversion pool is closed".to_string()))?;

        let timeout_secs = self.config.conversion_timeout_secs;
        let task = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            f()
        });

        match tokio::time::timeout(Duration::from_secs(timeout_secs), task).await {
            Err(_) => Err(AppError::Timeout(timeout_secs)),
            Ok(Err(join_err)) => Err(AppError::Internal(format!(
                "conversion task failed: {join_err}"
            ))),
            Ok(Ok(result)) => result.map_err(|e| AppError::Conversion(e.to_string())),
        }
    }
}
