//! YAML front matter extraction and deck directives.
//!
//! Front matter is split off before markdown parsing so its delimiters
//! are never mistaken for slide breaks: a leading `---` line, a YAML
//! body, and a closing `---` (or `...`) line. Directives the renderer
//! does not know are ignored; malformed YAML is tolerated with a warning
//! rather than failing the render.

use serde::Deserialize;

/// Per-document directives recognized in front matter.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct FrontMatter {
    /// Deck title; takes precedence over the first H1.
    pub title: Option<String>,
    /// Theme name overriding the configured theme for this document.
    pub theme: Option<String>,
    /// Pagination override for this document.
    pub paginate: Option<bool>,
}

/// Split a document into front matter YAML and markdown body.
///
/// Returns `(None, markdown)` unchanged when the document does not open
/// with a `---` line or the block is never closed.
pub(crate) fn split(markdown: &str) -> (Option<&str>, &str) {
    let Some(rest) = strip_open_fence(markdown) else {
        return (None, markdown);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed == "---" || trimmed == "..." {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, markdown)
}

/// Strip the opening `---` line, if present.
fn strip_open_fence(markdown: &str) -> Option<&str> {
    let rest = markdown.strip_prefix("---")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    rest.strip_prefix('\n')
}

/// Parse front matter YAML into directives.
///
/// Unknown keys are ignored. Malformed YAML logs a warning and yields no
/// directives.
pub(crate) fn parse(yaml: &str) -> FrontMatter {
    if yaml.trim().is_empty() {
        return FrontMatter::default();
    }
    match serde_yaml::from_str(yaml) {
        Ok(front_matter) => front_matter,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed front matter");
            FrontMatter::default()
        }
    }
}
