//! HTML rendering of the APOD view model.
//!
//! # Design
//! Every block goes through an askama template, so record text is
//! HTML-escaped on the way out. The style block is the one place a value is
//! inserted raw: `Scene::css_image_url`, which the core has already escaped
//! for a CSS string.

use apod_core::{ApodView, Scene, UNAVAILABLE_NOTICE};
use askama::Template;
use tracing::debug;

use crate::surface::Surface;

#[derive(Template)]
#[template(path = "style.html")]
struct StyleBlock<'a> {
    css_image_url: &'a str,
}

#[derive(Template)]
#[template(path = "headline.html")]
struct Headline<'a> {
    title: &'a str,
}

#[derive(Template)]
#[template(path = "info_section.html")]
struct InfoSection<'a> {
    date: &'a str,
    explanation: &'a str,
}

/// Draw `view` on `surface`.
///
/// A scene becomes exactly three markup blocks: style, headline, info
/// section. `Unavailable` writes the fallback notice once. `Blank` draws
/// nothing.
pub fn present<S: Surface + ?Sized>(view: &ApodView, surface: &mut S) -> askama::Result<()> {
    match view {
        ApodView::Scene(scene) => present_scene(scene, surface)?,
        ApodView::Blank => debug!("record has no image url, nothing to draw"),
        ApodView::Unavailable => surface.write(UNAVAILABLE_NOTICE),
    }
    Ok(())
}

fn present_scene<S: Surface + ?Sized>(scene: &Scene, surface: &mut S) -> askama::Result<()> {
    let style = StyleBlock {
        css_image_url: &scene.css_image_url,
    };
    let headline = Headline {
        title: &scene.title,
    };
    let info = InfoSection {
        date: &scene.date,
        explanation: &scene.explanation,
    };
    surface.markup(style.render()?);
    surface.markup(headline.render()?);
    surface.markup(info.render()?);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Error,
    Text,
    Markup,
}

#[derive(Debug, Clone)]
struct Block {
    kind: BlockKind,
    content: String,
}

impl Block {
    fn is_error(&self) -> bool {
        self.kind == BlockKind::Error
    }

    fn is_markup(&self) -> bool {
        self.kind == BlockKind::Markup
    }
}

/// A `Surface` that collects blocks and renders them into one HTML document.
#[derive(Template, Debug, Clone, Default)]
#[template(path = "page.html")]
pub struct HtmlPage {
    blocks: Vec<Block>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render the collected blocks into a complete document.
    pub fn finish(&self) -> askama::Result<String> {
        self.render()
    }

    fn push(&mut self, kind: BlockKind, content: String) {
        self.blocks.push(Block { kind, content });
    }
}

impl Surface for HtmlPage {
    fn error(&mut self, message: &str) {
        self.push(BlockKind::Error, message.to_string());
    }

    fn write(&mut self, text: &str) {
        self.push(BlockKind::Text, text.to_string());
    }

    fn markup(&mut self, html: String) {
        self.push(BlockKind::Markup, html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apod_core::{render, ApodRecord};

    /// Records every surface call in order.
    #[derive(Default)]
    struct Recorder {
        errors: Vec<String>,
        texts: Vec<String>,
        markup: Vec<String>,
    }

    impl Surface for Recorder {
        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn write(&mut self, text: &str) {
            self.texts.push(text.to_string());
        }

        fn markup(&mut self, html: String) {
            self.markup.push(html);
        }
    }

    /// Undo HTML escaping, whichever entity form the template engine picked.
    fn unescape(html: &str) -> String {
        [
            ("&#60;", "<"),
            ("&lt;", "<"),
            ("&#62;", ">"),
            ("&gt;", ">"),
            ("&#34;", "\""),
            ("&quot;", "\""),
            ("&#39;", "'"),
            ("&#38;", "&"),
            ("&amp;", "&"),
        ]
        .iter()
        .fold(html.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
    }

    fn view(json: &str) -> ApodView {
        let record: ApodRecord = serde_json::from_str(json).unwrap();
        render(Some(&record))
    }

    #[test]
    fn scene_emits_style_headline_and_info() {
        let mut surface = Recorder::default();
        present(
            &view(r#"{"url":"http://x/img.jpg","title":"Nebula","date":"2024-01-01","explanation":"A nebula."}"#),
            &mut surface,
        )
        .unwrap();

        assert!(surface.errors.is_empty());
        assert!(surface.texts.is_empty());
        assert_eq!(surface.markup.len(), 3);
        assert!(surface.markup[0].starts_with("<style>"));
        assert!(surface.markup[0].contains(r#"background-image: url("http://x/img.jpg");"#));
        assert!(surface.markup[0].contains("@media only screen and (max-width: 768px)"));
        assert_eq!(surface.markup[1].trim(), r#"<div class="headline">Nebula</div>"#);
        assert!(surface.markup[2].contains("<strong>Date:</strong> 2024-01-01"));
        assert!(surface.markup[2].contains("<strong>Explanation:</strong> A nebula."));
    }

    #[test]
    fn scene_shows_placeholders_for_missing_fields() {
        let mut surface = Recorder::default();
        present(&view(r#"{"url":"http://x/img.jpg"}"#), &mut surface).unwrap();

        assert!(surface.markup[1].contains("No Title"));
        assert!(surface.markup[2].contains("Unknown Date"));
        assert!(surface.markup[2].contains("No explanation available."));
    }

    #[test]
    fn record_text_is_escaped() {
        let mut surface = Recorder::default();
        present(
            &view(r#"{"url":"http://x/img.jpg","title":"<script>alert(1)</script>","explanation":"Tom & Jerry"}"#),
            &mut surface,
        )
        .unwrap();

        assert!(!surface.markup[1].contains("<script>"));
        assert!(!surface.markup[2].contains("Tom & Jerry"));
        assert!(unescape(&surface.markup[1]).contains("<script>alert(1)</script>"));
        assert!(unescape(&surface.markup[2]).contains("Tom & Jerry"));
    }

    #[test]
    fn hostile_url_cannot_close_style_block() {
        let mut surface = Recorder::default();
        present(
            &view(r#"{"url":"http://x/\");}</style><script>x</script>"}"#),
            &mut surface,
        )
        .unwrap();

        assert_eq!(surface.markup[0].matches("</style>").count(), 1);
        assert!(!surface.markup[0].contains("<script>"));
    }

    #[test]
    fn blank_view_draws_nothing() {
        let mut surface = Recorder::default();
        present(&view("{}"), &mut surface).unwrap();

        assert!(surface.errors.is_empty());
        assert!(surface.texts.is_empty());
        assert!(surface.markup.is_empty());
    }

    #[test]
    fn unavailable_view_writes_notice_once() {
        let mut surface = Recorder::default();
        present(&ApodView::Unavailable, &mut surface).unwrap();

        assert_eq!(surface.texts, vec![UNAVAILABLE_NOTICE.to_string()]);
        assert!(surface.markup.is_empty());
    }

    #[test]
    fn html_page_wraps_blocks_in_document() {
        let mut page = HtmlPage::new();
        assert!(page.is_empty());
        present(&view(r#"{"url":"http://x/img.jpg","title":"Nebula"}"#), &mut page).unwrap();
        assert!(!page.is_empty());

        let html = page.finish().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="app-view">"#));
        assert!(html.contains(r#"background-image: url("http://x/img.jpg")"#));
        assert!(html.contains(r#"<div class="headline">Nebula</div>"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn html_page_escapes_plain_text_blocks() {
        let mut page = HtmlPage::new();
        page.error("Error fetching NASA APOD: HTTP 500: <b>boom</b>");
        page.write(UNAVAILABLE_NOTICE);

        let html = page.finish().unwrap();
        assert!(html.contains(r#"<div class="alert alert-error" role="alert">"#));
        assert!(!html.contains("<b>boom</b>"));
        assert!(unescape(&html).contains("HTTP 500: <b>boom</b>"));
        assert!(html.contains(r#"<p class="notice">NASA APOD data could not be loaded.</p>"#));
    }

    #[test]
    fn empty_page_is_still_a_document() {
        let html = HtmlPage::new().finish().unwrap();
        assert!(html.contains("<main class=\"main\">"));
        assert!(!html.contains("<style>"));
    }
}
