//! Synchronous client core for NASA's Astronomy Picture of the Day.
//!
//! # Overview
//! Builds the APOD `HttpRequest`, parses the `HttpResponse` into an
//! `ApodRecord`, and turns the record (or its absence) into an `ApodView`
//! that a host renders through its own templating. The core never touches
//! the network (host-does-IO pattern), so every step is deterministic.
//!
//! # Design
//! - `ApodClient` holds only the endpoint and the API key.
//! - Fetching is split into `build_fetch` and `parse_fetch`, so the I/O
//!   boundary is explicit.
//! - `render` is a pure function from `Option<&ApodRecord>` to a view model;
//!   it never emits markup itself.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{ApodClient, DEFAULT_ENDPOINT};
pub use error::ApodError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::ApodRecord;
pub use view::{error_banner, render, ApodView, Scene, UNAVAILABLE_NOTICE};
