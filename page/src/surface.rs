//! The UI surface a render pass draws on.

/// Output primitives offered by the host front-end.
///
/// `markup` receives HTML that has already gone through an escaping
/// template; `error` and `write` receive plain text, which the surface must
/// escape itself.
pub trait Surface {
    /// Show a transient error banner.
    fn error(&mut self, message: &str);

    /// Show a line of plain text.
    fn write(&mut self, text: &str);

    /// Embed a rendered block verbatim.
    fn markup(&mut self, html: String);
}
