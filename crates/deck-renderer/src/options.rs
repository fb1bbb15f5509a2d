//! Renderer construction options.

use serde::Deserialize;

/// Options accepted by [`SlideRenderer::new`](crate::SlideRenderer::new).
///
/// Deserializable with serde so decks can be configured from a config
/// file; all fields have defaults, so an empty mapping is valid.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RendererOptions {
    /// Name of the built-in theme to render with.
    ///
    /// Unknown names are rejected at construction time. Front matter may
    /// override the theme per document.
    pub theme: String,
    /// Pass raw HTML in the source through to the output.
    ///
    /// When disabled, raw HTML is escaped and shows up as text.
    pub allow_html: bool,
    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists).
    pub gfm: bool,
    /// Number slides via `data-page` attributes.
    pub paginate: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            theme: "default".to_owned(),
            allow_html: false,
            gfm: true,
            paginate: false,
        }
    }
}
