//! A small axum server that speaks the products API.
//!
//! Runs on its own thread and tokio runtime, bound to an ephemeral localhost
//! port. Every request is answered with the configured [`Reply`] and its
//! target is recorded so tests can check which pages were asked for.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use shelfview_types::Product;

pub const PRODUCTS_PATH: &str = "/api/v1/products";

/// What the server answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// Serve `products` paged by the `limit`/`offset` query parameters
    Catalog(Vec<Product>),
    /// Answer every request with this status and a small JSON error body
    Status(u16),
    /// Answer every request with 200 and this body verbatim
    Body(String),
}

/// A missing limit means "everything after offset"
#[derive(Debug, Default, Deserialize)]
struct Paging {
    limit: Option<usize>,
    offset: Option<usize>,
}

struct ServerState {
    reply: Reply,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct CatalogServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogServer {
    pub fn spawn(reply: Reply) -> Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(ServerState {
            reply,
            requests: Arc::clone(&requests),
        });
        let app = Router::new()
            .route(PRODUCTS_PATH, get(products))
            .with_state(state);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start server runtime")?;

        thread::Builder::new()
            .name("catalog-server".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                        return;
                    };
                    // lives until the test process exits
                    let _ = axum::serve(listener, app).await;
                });
            })
            .context("Failed to start server thread")?;

        Ok(Self { addr, requests })
    }

    /// Base URL to hand to the client, without paging parameters
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, PRODUCTS_PATH)
    }

    /// Request targets seen so far, e.g. `/api/v1/products?limit=100&offset=0`
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

async fn products(
    State(state): State<Arc<ServerState>>,
    uri: Uri,
    Query(paging): Query<Paging>,
) -> Response {
    if let Ok(mut log) = state.requests.lock() {
        log.push(uri.path_and_query().map_or_else(|| uri.to_string(), |pq| pq.to_string()));
    }

    match &state.reply {
        Reply::Catalog(products) => {
            let page: Vec<&Product> = products
                .iter()
                .skip(paging.offset.unwrap_or(0))
                .take(paging.limit.unwrap_or(usize::MAX))
                .collect();
            Json(page).into_response()
        }
        Reply::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = serde_json::json!({ "message": format!("status {code}") });
            (status, Json(body)).into_response()
        }
        Reply::Body(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
        }
    }
}
