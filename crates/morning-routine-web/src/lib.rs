//! HTTP adapter for the morning routine checklist.
//!
//! Routes:
//! - `GET /` - HTML page
//! - `GET /api/list` - checklist document as JSON
//! - `POST /api/complete` - `{ "id": n }`
//! - `POST /api/waketime` - `{ "wake_time": "HH:MM" }`
//!
//! All handlers share one [`ChecklistService`] behind a single async mutex,
//! so each request's load/modify/save cycle runs alone. The cycle itself does
//! blocking file I/O and runs on the blocking pool.

mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use morning_routine_core::ChecklistService;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<ChecklistService>>,
}

impl AppState {
    pub fn new(service: ChecklistService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Run `op` on the service while holding the lock, off the async workers.
    pub(crate) async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&ChecklistService) -> morning_routine_core::error::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service).lock_owned().await;
        let outcome = tokio::task::spawn_blocking(move || op(&*service))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "checklist task failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "checklist task failed")
            })?;
        Ok(outcome?)
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/list", get(routes::list))
        .route("/api/complete", post(routes::complete))
        .route("/api/waketime", post(routes::wake_time))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already-bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, router(state)).await
}
