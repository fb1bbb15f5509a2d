//! Tracking structs for event-driven rendering.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

use crate::util::slugify;

/// Buffers the content of the fenced code block currently being parsed.
#[derive(Default)]
pub(crate) struct CodeFence {
    active: bool,
    language: Option<String>,
    buffer: String,
}

impl CodeFence {
    pub fn begin(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// Close the fence and return (language, content).
    pub fn finish(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// Column alignment and header tracking for the current table.
#[derive(Default)]
pub(crate) struct TableTracker {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableTracker {
    pub fn begin(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub fn begin_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub fn end_head(&mut self) {
        self.in_head = false;
    }

    pub fn begin_row(&mut self) {
        self.cell_index = 0;
    }

    pub fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Inline style attribute for the current cell, empty when unaligned.
    pub fn alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// Heading capture: slug ids, inline markup, and deck title from the
/// first H1.
#[derive(Default)]
pub(crate) struct HeadingTracker {
    level: Option<u8>,
    text: String,
    html: String,
    title: Option<String>,
    id_counts: HashMap<String, usize>,
}

impl HeadingTracker {
    pub fn begin(&mut self, level: u8) {
        self.level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Close the heading. Returns (level, id, inline html), or `None` when
    /// no heading is open.
    pub fn finish(&mut self) -> Option<(u8, String, String)> {
        let level = self.level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);

        if level == 1 && self.title.is_none() {
            self.title = Some(text.trim().to_owned());
        }

        Some((level, self.unique_id(&text), html))
    }

    pub fn is_active(&self) -> bool {
        self.level.is_some()
    }

    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    /// Slugify and deduplicate against ids already handed out.
    fn unique_id(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.id_counts.entry(base.clone()).or_default();
        let id = match *count {
            0 => base,
            n => format!("{base}-{n}"),
        };
        *count += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fence() {
        let mut fence = CodeFence::default();
        assert!(!fence.is_active());

        fence.begin(Some("rust".to_owned()));
        assert!(fence.is_active());
        fence.push_str("fn main() {}");

        let (lang, content) = fence.finish();
        assert_eq!(lang.as_deref(), Some("rust"));
        assert_eq!(content, "fn main() {}");
        assert!(!fence.is_active());
    }

    #[test]
    fn test_table_alignment() {
        let mut table = TableTracker::default();
        table.begin(vec![Alignment::Left, Alignment::None, Alignment::Right]);

        table.begin_head();
        assert!(table.is_in_head());
        assert_eq!(table.alignment_style(), r#" style="text-align:left""#);

        table.next_cell();
        assert_eq!(table.alignment_style(), "");

        table.next_cell();
        assert_eq!(table.alignment_style(), r#" style="text-align:right""#);

        table.end_head();
        assert!(!table.is_in_head());
    }

    #[test]
    fn test_heading_title_is_first_h1() {
        let mut heading = HeadingTracker::default();

        heading.begin(1);
        heading.push_text("Deck Title");
        let (level, id, _html) = heading.finish().unwrap();
        assert_eq!(level, 1);
        assert_eq!(id, "deck-title");

        heading.begin(1);
        heading.push_text("Another H1");
        heading.finish();

        assert_eq!(heading.take_title().as_deref(), Some("Deck Title"));
    }

    #[test]
    fn test_heading_duplicate_ids() {
        let mut heading = HeadingTracker::default();
        for _ in 0..3 {
            heading.begin(2);
            heading.push_text("Recap");
            heading.finish();
        }

        heading.begin(2);
        heading.push_text("Recap");
        let (_, id, _) = heading.finish().unwrap();
        assert_eq!(id, "recap-3");
    }
}
