//! View model for the picture-of-the-day page.
//!
//! # Design
//! `render` decides *what* the page shows; the host decides *how* by feeding
//! the view through its own escaping templates. The only value a host may
//! insert unescaped is `Scene::css_image_url`, which is already escaped for a
//! double-quoted CSS string.

use crate::error::ApodError;
use crate::types::ApodRecord;

/// Plain notice shown when no record could be fetched.
pub const UNAVAILABLE_NOTICE: &str = "NASA APOD data could not be loaded.";

/// What a single render pass puts on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApodView {
    /// Background image plus headline and footer.
    Scene(Scene),
    /// A record arrived but had no usable image url. Nothing is shown.
    Blank,
    /// No record at all. Only the fallback notice is shown.
    Unavailable,
}

/// Everything needed to draw the background page for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub image_url: String,
    /// `image_url` escaped for use inside `url("...")`.
    pub css_image_url: String,
    pub title: String,
    pub date: String,
    pub explanation: String,
}

pub fn render(record: Option<&ApodRecord>) -> ApodView {
    let Some(record) = record else {
        return ApodView::Unavailable;
    };
    let Some(image_url) = record.image_url() else {
        return ApodView::Blank;
    };
    ApodView::Scene(Scene {
        image_url: image_url.to_string(),
        css_image_url: css_string(image_url),
        title: record.title().to_string(),
        date: record.date().to_string(),
        explanation: record.explanation().to_string(),
    })
}

/// One-line message for the error banner.
pub fn error_banner(err: &ApodError) -> String {
    format!("Error fetching NASA APOD: {err}")
}

/// Escape `raw` for the body of a double-quoted CSS string.
///
/// `<` is escaped too so the value can never close the surrounding
/// `<style>` element.
fn css_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\3c "),
            c if c.is_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            c => out.push(c),
        }
    }
    out
}
