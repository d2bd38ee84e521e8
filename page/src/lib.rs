//! Host for the APOD picture-of-the-day page.
//!
//! # Overview
//! Executes the request built by `apod-core` with a blocking ureq transport,
//! turns the outcome into a view, and draws the view on a `Surface` through
//! askama templates. `server` wraps one render pass per `GET /`.
//!
//! # Design
//! - A render pass is strictly linear: fetch, report any failure, render,
//!   present. Nothing is retried.
//! - Fetch failures are drawn on the page, never propagated. The only error
//!   a pass can return is a template failure.
//! - Configuration is read once in `main` and passed down explicitly.

pub mod config;
pub mod error;
pub mod page;
pub mod server;
pub mod surface;
pub mod transport;

use apod_core::{error_banner, render, ApodClient, ApodError, ApodRecord};
use tracing::{debug, info, warn};

pub use config::Config;
pub use error::PageError;
pub use page::{present, HtmlPage};
pub use server::{app, AppState};
pub use surface::Surface;
pub use transport::{Transport, UreqTransport};

/// Fetch today's record with one blocking round-trip.
///
/// `Ok(None)` means the server answered 2xx with an empty body value.
pub fn fetch_apod<T: Transport + ?Sized>(
    client: &ApodClient,
    transport: &T,
) -> Result<Option<ApodRecord>, ApodError> {
    let request = client.build_fetch();
    debug!(endpoint = client.endpoint(), method = request.method.as_str(), "fetching APOD");
    let response = transport.execute(&request)?;
    debug!(status = response.status, bytes = response.body.len(), "APOD response received");
    client.parse_fetch(response)
}

/// Run one full render pass onto `surface`.
///
/// A failed fetch shows the error banner, then the fallback notice. An empty
/// body shows only the notice. A record without an image url shows nothing.
pub fn display_picture_of_the_day<T, S>(
    client: &ApodClient,
    transport: &T,
    surface: &mut S,
) -> askama::Result<()>
where
    T: Transport + ?Sized,
    S: Surface + ?Sized,
{
    let record = match fetch_apod(client, transport) {
        Ok(Some(record)) => {
            info!(date = record.date(), title = record.title(), "loaded picture of the day");
            Some(record)
        }
        Ok(None) => {
            info!(endpoint = client.endpoint(), "APOD response carried no record");
            None
        }
        Err(err) => {
            warn!(error = %err, endpoint = client.endpoint(), "failed to fetch picture of the day");
            surface.error(&error_banner(&err));
            None
        }
    };
    present(&render(record.as_ref()), surface)
}
