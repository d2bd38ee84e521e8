//! Failures of the page server itself.
//!
//! Fetch failures never land here: they are drawn on the page as a banner.
//! Only a broken template or a lost worker thread turns into a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("render worker failed: {0}")]
    Worker(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "failed to render picture of the day");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
