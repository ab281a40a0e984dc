use axum::extract::FromRef;
use std::sync::Arc;

use crate::directory::JobDirectory;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<JobDirectory>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub directory: Arc<JobDirectory>,
}

impl AppState {
    /// State backed by the process-wide directory.
    pub fn shared() -> Self {
        Self {
            directory: crate::directory::shared(),
        }
    }

    /// State backed by a caller-supplied directory (tests, tools).
    pub fn with_directory(directory: JobDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
