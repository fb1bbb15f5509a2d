//! Markdown to HTML slide-deck renderer with a pluggable highlighting hook.
//!
//! [`SlideRenderer`] turns a markdown document into a deck of
//! `<section class="slide">` elements: thematic breaks separate slides,
//! YAML front matter carries per-document directives, and fenced code
//! blocks are delegated to whatever [`CodeHighlighter`] strategy the
//! caller installs at construction time. The renderer itself never
//! tokenizes code.
//!
//! # Example
//!
//! ```
//! use deck_renderer::{RendererOptions, SlideRenderer};
//!
//! let renderer = SlideRenderer::new(RendererOptions::default()).unwrap();
//! let result = renderer
//!     .render_markdown("# Hello\n\n---\n\nSecond slide")
//!     .unwrap();
//! assert_eq!(result.slide_count, 2);
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```

mod front_matter;
mod highlight;
mod options;
mod renderer;
mod state;
mod theme;
mod util;

pub use highlight::{CodeHighlighter, HookError};
pub use options::RendererOptions;
pub use renderer::{RenderError, RenderResult, SlideRenderer};
pub use theme::Theme;
pub use util::escape_html;
