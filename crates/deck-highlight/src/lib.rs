//! Grammar registry and code highlighting for deck rendering.
//!
//! Wraps [`syntect`] behind a small surface: a process-wide grammar
//! registry, a loader that resolves language names against it, and a
//! [`highlight`] function producing class-annotated HTML spans suitable
//! for embedding inside a `<pre><code>` element.
//!
//! The registry is built once per process and only read afterwards.
//! [`load_languages`] is idempotent, so callers that construct several
//! renderers in one process can invoke it each time without penalty.

use std::sync::OnceLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Error raised while resolving grammars or tokenizing code.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// No grammar is registered under the requested name.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The tokenizer failed on the given source text.
    #[error("tokenization failed: {0}")]
    Tokenize(#[from] syntect::Error),
}

/// Resolved handle to a registered grammar.
///
/// Obtained from [`grammar`] and valid for the whole process lifetime,
/// since the registry it points into is never torn down.
#[derive(Clone, Copy, Debug)]
pub struct Grammar {
    syntax: &'static SyntaxReference,
}

impl Grammar {
    /// Canonical name of the grammar (e.g. "Rust").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.syntax.name
    }
}

/// Process-wide grammar registry.
///
/// Built on first access from the bundled grammar set. Concurrent first
/// access is safe; later calls are plain reads.
fn registry() -> &'static SyntaxSet {
    static REGISTRY: OnceLock<SyntaxSet> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let set = SyntaxSet::load_defaults_newlines();
        tracing::debug!(grammar_count = set.syntaxes().len(), "Grammar registry initialized");
        set
    })
}

/// Ensure every named grammar is available in the registry.
///
/// Names are matched the way fence info strings name languages ("rust",
/// "py", "Rust"). Returns [`HighlightError::UnknownLanguage`] for the
/// first name that cannot be resolved. Safe to call repeatedly.
pub fn load_languages(names: &[&str]) -> Result<(), HighlightError> {
    for name in names {
        grammar(name)?;
    }
    Ok(())
}

/// Resolve a grammar by language name or file extension.
pub fn grammar(name: &str) -> Result<Grammar, HighlightError> {
    registry()
        .find_syntax_by_token(name)
        .map(|syntax| Grammar { syntax })
        .ok_or_else(|| HighlightError::UnknownLanguage(name.to_owned()))
}

/// Tokenize `code` with `grammar` into class-annotated HTML spans.
///
/// The `language` argument exists for signature compatibility with the
/// conventional `(code, grammar, language)` highlight call and does not
/// influence the output: tokenization depends only on the code text and
/// the grammar.
pub fn highlight(code: &str, grammar: &Grammar, _language: &str) -> Result<String, HighlightError> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(grammar.syntax, registry(), ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}
