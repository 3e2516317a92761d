//! Transaction API - custom handler for a serverless function host
//!
//! The host forwards each invocation of the transaction function to
//! `/transaction` on the port it advertises through
//! `FUNCTIONS_CUSTOMHANDLER_PORT`. The handler logs the request and answers
//! with a fixed greeting wrapped in the host's invocation envelope.

pub mod config;
pub mod error;
pub mod router;
pub mod shutdown;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use config::AppConfig;
pub use router::create_router;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
}

/// Serve the transaction router on `listener` until `shutdown` resolves.
///
/// Peer addresses are exposed to the handler for request logging.
pub async fn serve<F>(listener: TcpListener, config: AppConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = Arc::new(AppState { config });
    let app = create_router(state).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}
