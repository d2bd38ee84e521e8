use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;

/// Path the real provider serves APOD under.
pub const APOD_PATH: &str = "/planetary/apod";

/// Canned answer returned for every request that carries an API key.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub status: StatusCode,
    pub body: String,
}

impl Fixture {
    /// A 200 response whose body is `record`.
    pub fn record(record: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: record.to_string(),
        }
    }

    /// A response with an arbitrary status and raw body. Codes outside
    /// 100..=999 fall back to 500.
    pub fn status(code: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::record(json!({
            "date": "2024-01-01",
            "explanation": "A star-forming region glowing in hydrogen light.",
            "hdurl": "https://apod.nasa.gov/apod/image/2401/nebula_hd.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Nebula",
            "url": "https://apod.nasa.gov/apod/image/2401/nebula.jpg"
        }))
    }
}

pub fn app(fixture: Fixture) -> Router {
    Router::new()
        .route(APOD_PATH, get(picture_of_the_day))
        .with_state(fixture)
}

pub async fn run(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixture)).await
}

async fn picture_of_the_day(
    State(fixture): State<Fixture>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let has_key = params.get("api_key").is_some_and(|key| !key.is_empty());
    if !has_key {
        return json_response(StatusCode::FORBIDDEN, missing_key_body());
    }
    json_response(fixture.status, fixture.body)
}

fn missing_key_body() -> String {
    json!({
        "error": {
            "code": "API_KEY_MISSING",
            "message": "No api_key was supplied. Get one at https://api.nasa.gov:443"
        }
    })
    .to_string()
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
