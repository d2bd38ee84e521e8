//! HTTP front-end that serves the rendered page.
//!
//! Each `GET /` runs one full render pass. The fetch is blocking, so the pass
//! runs on tokio's blocking pool and the async workers stay free.

use std::sync::Arc;

use apod_core::ApodClient;
use axum::{extract::State, response::Html, routing::get, Router};
use tokio::net::TcpListener;

use crate::display_picture_of_the_day;
use crate::error::PageError;
use crate::page::HtmlPage;
use crate::transport::Transport;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    client: Arc<ApodClient>,
    transport: Arc<dyn Transport>,
}

impl AppState {
    pub fn new(client: ApodClient, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: Arc::new(client),
            transport,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(picture_of_the_day))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

/// Run one render pass and return the finished document.
pub fn render_page(state: &AppState) -> Result<String, PageError> {
    let mut page = HtmlPage::new();
    display_picture_of_the_day(&state.client, state.transport.as_ref(), &mut page)?;
    Ok(page.finish()?)
}

async fn picture_of_the_day(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let html = tokio::task::spawn_blocking(move || render_page(&state))
        .await
        .map_err(|e| PageError::Worker(e.to_string()))??;
    Ok(Html(html))
}
