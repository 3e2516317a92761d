//! Transaction router - the single route the function host invokes
//!
//! Every request to `/transaction` is logged and answered with the greeting
//! envelope, whatever its method, headers, or query.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{
        header::{CONTENT_TYPE, HOST, USER_AGENT},
        HeaderMap, Request,
    },
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use chrono::{Local, NaiveDateTime};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use transaction_api_sdk::prelude::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Create the router serving `/transaction` for all methods
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/transaction", any(handle_transaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle an invocation of the transaction function
async fn handle_transaction(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
) -> Result<Response, ApiError> {
    let now = Local::now().naive_local();
    let info = request_info(&request);
    let request_id = Uuid::new_v4();

    tracing::info_span!("transaction", request_id = %request_id, port = state.config.port)
        .in_scope(|| respond(&info, &now, encode_envelope))
}

fn encode_envelope(now: &NaiveDateTime) -> Result<Vec<u8>, HandlerError> {
    InvokeResponse::greeting(now)?.to_json_vec()
}

/// Log the request and answer with the encoded envelope.
///
/// Nothing is written until `encode` succeeds, so a failure yields only the 500.
fn respond<E>(info: &RequestInfo, now: &NaiveDateTime, encode: E) -> Result<Response, ApiError>
where
    E: FnOnce(&NaiveDateTime) -> Result<Vec<u8>, HandlerError>,
{
    let timestamp = format_timestamp(now);
    log_request(info, &timestamp);

    let body = encode(now)?;

    tracing::info!("Response sent successfully at {}", timestamp);
    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

fn log_request(info: &RequestInfo, timestamp: &str) {
    tracing::info!(
        method = %info.method,
        url = %info.url,
        host = %info.host,
        remote_addr = %info.remote_addr_or_dash(),
        invocation_id = %info.invocation_id,
        user_agent = %info.user_agent,
        "TX request received at {}",
        timestamp
    );

    for (key, values) in &info.query {
        tracing::info!(key = %key, values = ?values, "Query parameter");
    }
}

/// Collect the fields logged for a request
pub(crate) fn request_info(request: &Request<Body>) -> RequestInfo {
    let headers = request.headers();
    let uri = request.uri();

    let host = header_str(headers, HOST.as_str())
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .unwrap_or_default();

    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    RequestInfo {
        method: request.method().to_string(),
        url: uri.to_string(),
        host,
        remote_addr,
        invocation_id: header_str(headers, INVOCATION_ID_HEADER).unwrap_or_default(),
        user_agent: header_str(headers, USER_AGENT.as_str()).unwrap_or_default(),
        query: RequestInfo::parse_query(uri.query()),
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
