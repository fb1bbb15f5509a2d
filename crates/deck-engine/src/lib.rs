//! Configured slide-deck renderer factory.
//!
//! [`create_renderer`] builds a [`SlideRenderer`] from caller options and
//! installs a highlighting hook that routes every fenced code block
//! through [`deck_highlight`] with the Rust grammar. The options are
//! forwarded to the renderer untouched, and the returned renderer behaves
//! exactly like an unconfigured one everywhere except inside code blocks.
//!
//! # Example
//!
//! ```
//! use deck_engine::{RendererOptions, create_renderer};
//!
//! let deck = create_renderer(RendererOptions::default()).unwrap();
//! let result = deck
//!     .render_markdown("# Demo\n\n```python\nprint(1)\n```")
//!     .unwrap();
//! assert!(result.html.contains("language-python"));
//! ```

use deck_highlight::Grammar;
use deck_renderer::{CodeHighlighter, HookError, SlideRenderer};

pub use deck_renderer::{RenderError, RenderResult, RendererOptions, Theme};

/// Error from [`create_renderer`].
///
/// Pure pass-through: construction failures from the renderer and grammar
/// failures from the highlighter surface unchanged.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("{0}")]
    Highlight(#[from] deck_highlight::HighlightError),

    #[error("{0}")]
    Render(#[from] deck_renderer::RenderError),
}

/// Highlighting hook pinned to a single grammar.
///
/// The declared fence language is accepted to satisfy the hook signature
/// but never consulted for grammar selection.
struct PinnedGrammarHighlighter {
    grammar: Grammar,
}

impl CodeHighlighter for PinnedGrammarHighlighter {
    fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HookError> {
        deck_highlight::highlight(code, &self.grammar, lang.unwrap_or_default())
            .map_err(HookError::new)
    }
}

/// Build a slide-deck renderer that highlights all code as Rust.
///
/// Ensures the Rust grammar is loaded (a one-time, idempotent,
/// process-wide registration), constructs a [`SlideRenderer`] with
/// `options` forwarded unchanged, and installs the pinned-grammar hook.
///
/// Every fenced code block in every document rendered by the returned
/// renderer is tokenized with the Rust grammar, regardless of the
/// language tag declared on the fence: a block tagged `python` still
/// comes out highlighted as Rust. Callers generalizing this factory to
/// other content should replace the hook with one that selects a grammar
/// by tag.
pub fn create_renderer(options: RendererOptions) -> Result<SlideRenderer, EngineError> {
    deck_highlight::load_languages(&["rust"])?;
    let grammar = deck_highlight::grammar("rust")?;
    tracing::debug!(grammar = grammar.name(), "Configuring deck renderer");

    Ok(SlideRenderer::new(options)?.with_highlighter(PinnedGrammarHighlighter { grammar }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rust_tokenized(code: &str) -> String {
        let grammar = deck_highlight::grammar("rust").unwrap();
        deck_highlight::highlight(code, &grammar, "").unwrap()
    }

    #[test]
    fn test_options_forwarded_unchanged() {
        let options = RendererOptions {
            theme: "gaia".to_owned(),
            paginate: true,
            ..RendererOptions::default()
        };
        let deck = create_renderer(options.clone()).unwrap();
        assert_eq!(deck.options(), &options);
    }

    #[test]
    fn test_identical_to_plain_renderer_without_code_blocks() {
        let markdown = "# Title\n\nsome *styled* text\n\n---\n\n> a quote";
        let configured = create_renderer(RendererOptions::default())
            .unwrap()
            .render_markdown(markdown)
            .unwrap();
        let plain = SlideRenderer::new(RendererOptions::default())
            .unwrap()
            .render_markdown(markdown)
            .unwrap();
        assert_eq!(configured.html, plain.html);
        assert_eq!(configured.title, plain.title);
    }

    #[test]
    fn test_output_independent_of_language_tag() {
        let deck = create_renderer(RendererOptions::default()).unwrap();
        let a = deck.render_markdown("```python\nlet x = 1;\n```").unwrap();
        let b = deck.render_markdown("```not-a-language\nlet x = 1;\n```").unwrap();
        let c = deck.render_markdown("```\nlet x = 1;\n```").unwrap();

        // Only the wrapper class may differ between declared tags.
        let tokens = rust_tokenized("let x = 1;\n");
        assert!(a.html.contains(&tokens));
        assert!(b.html.contains(&tokens));
        assert!(c.html.contains(&tokens));
    }

    #[test]
    fn test_delegates_to_highlighter() {
        let deck = create_renderer(RendererOptions::default()).unwrap();
        let result = deck.render_markdown("```rust\nfn main() {}\n```").unwrap();
        let expected = format!(
            r#"<pre><code class="language-rust">{}</code></pre>"#,
            rust_tokenized("fn main() {}\n")
        );
        assert!(result.html.contains(&expected));
    }

    #[test]
    fn test_python_block_is_highlighted_as_rust() {
        let deck = create_renderer(RendererOptions::default()).unwrap();
        let result = deck.render_markdown("```python\ndef f(): pass\n```").unwrap();
        let expected = format!(
            r#"<pre><code class="language-python">{}</code></pre>"#,
            rust_tokenized("def f(): pass\n")
        );
        assert!(result.html.contains(&expected));
    }

    #[test]
    fn test_repeated_construction_is_idempotent() {
        for _ in 0..3 {
            let deck = create_renderer(RendererOptions::default()).unwrap();
            let result = deck.render_markdown("```go\nx := 1\n```").unwrap();
            assert!(result.html.contains(&rust_tokenized("x := 1\n")));
        }
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = RendererOptions {
            theme: "neon".to_owned(),
            ..RendererOptions::default()
        };
        let err = create_renderer(options).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Render(RenderError::UnknownTheme(ref name)) if name == "neon"
        ));
        assert_eq!(err.to_string(), "unknown theme: neon");
    }

    #[test]
    fn test_non_code_rendering_unaffected() {
        let deck = create_renderer(RendererOptions::default()).unwrap();
        let result = deck
            .render_markdown("---\ntitle: Sprint Review\npaginate: true\n---\n## Agenda")
            .unwrap();
        assert_eq!(result.title.as_deref(), Some("Sprint Review"));
        assert!(result.html.contains(r#"data-page="1""#));
        assert!(result.html.contains(r#"<h2 id="agenda">Agenda</h2>"#));
    }
}
