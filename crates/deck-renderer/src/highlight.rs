//! Highlighting hook for fenced code blocks.
//!
//! The renderer does not know how to tokenize code; it delegates each
//! fenced block to a [`CodeHighlighter`] installed at construction time.
//! The hook receives the code text and the declared fence language and
//! returns markup that is embedded verbatim inside the block's
//! `<pre><code>` element. Without a hook, code renders escaped.

/// Error returned by a [`CodeHighlighter`] hook.
///
/// A thin box around whatever the highlighting engine raised; the
/// renderer propagates it to the caller without translation.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct HookError(Box<dyn std::error::Error + Send + Sync>);

impl HookError {
    /// Wrap an engine error for propagation through the renderer.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Strategy invoked once per fenced code block.
///
/// # Arguments
///
/// * `code` - Raw content of the block
/// * `lang` - Language tag declared on the fence, if any
///
/// The returned string is trusted markup: the renderer embeds it without
/// escaping.
pub trait CodeHighlighter {
    /// Produce highlighted markup for one code block.
    fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HookError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseHighlighter;

    impl CodeHighlighter for UppercaseHighlighter {
        fn highlight(&self, code: &str, _lang: Option<&str>) -> Result<String, HookError> {
            Ok(code.to_uppercase())
        }
    }

    #[test]
    fn test_hook_implementable() {
        let hook = UppercaseHighlighter;
        assert_eq!(hook.highlight("abc", Some("rust")).unwrap(), "ABC");
    }

    #[test]
    fn test_hook_error_displays_source() {
        let err = HookError::new(std::io::Error::other("engine exploded"));
        assert_eq!(err.to_string(), "engine exploded");
    }
}
