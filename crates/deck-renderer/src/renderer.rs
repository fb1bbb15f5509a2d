//! Markdown to slide-deck HTML rendering.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::front_matter::{self, FrontMatter};
use crate::highlight::{CodeHighlighter, HookError};
use crate::options::RendererOptions;
use crate::state::{CodeFence, HeadingTracker, TableTracker};
use crate::theme::Theme;
use crate::util::{escape_html, heading_level_to_num};

/// Error from renderer construction or rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The configured theme is not a built-in theme name.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// The highlighting hook failed on a code block.
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] HookError),
}

/// A rendered deck.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Slide markup: one `<section class="slide">` per slide.
    pub html: String,
    /// Stylesheet of the effective theme.
    pub css: String,
    /// Deck title from front matter, else from the first H1.
    pub title: Option<String>,
    /// Number of slides in the deck.
    pub slide_count: usize,
}

/// Markdown to slide-deck renderer.
///
/// Thematic breaks (`---`) separate slides. YAML front matter supplies
/// per-document directives (`title`, `theme`, `paginate`) that override
/// the constructor options for that document.
///
/// Fenced code blocks are delegated to the [`CodeHighlighter`] installed
/// via [`with_highlighter`](Self::with_highlighter); without one they
/// render as escaped text. Everything else about the renderer behaves the
/// same with or without a hook.
pub struct SlideRenderer {
    options: RendererOptions,
    theme: Theme,
    highlighter: Option<Box<dyn CodeHighlighter>>,
}

impl std::fmt::Debug for SlideRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideRenderer")
            .field("options", &self.options)
            .field("theme", &self.theme)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

impl SlideRenderer {
    /// Create a renderer from options.
    ///
    /// Fails with [`RenderError::UnknownTheme`] when the options name a
    /// theme that is not built in; options are otherwise not inspected.
    pub fn new(options: RendererOptions) -> Result<Self, RenderError> {
        let theme = Theme::from_name(&options.theme)
            .ok_or_else(|| RenderError::UnknownTheme(options.theme.clone()))?;
        Ok(Self {
            options,
            theme,
            highlighter: None,
        })
    }

    /// Install the highlighting strategy for fenced code blocks.
    #[must_use]
    pub fn with_highlighter<H: CodeHighlighter + 'static>(mut self, highlighter: H) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// The options this renderer was constructed with.
    #[must_use]
    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    /// The theme resolved from the options.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Parser options based on the GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.options.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render a markdown document into a slide deck.
    pub fn render_markdown(&self, markdown: &str) -> Result<RenderResult, RenderError> {
        let (yaml, body) = front_matter::split(markdown);
        let directives = yaml.map(front_matter::parse).unwrap_or_default();
        let parser = Parser::new_ext(body, self.parser_options());
        DeckWalker::new(self, directives).render(parser)
    }
}

/// Per-document rendering pass.
///
/// Owns all mutable state for one render, so [`SlideRenderer`] stays
/// reusable across documents.
struct DeckWalker<'r> {
    renderer: &'r SlideRenderer,
    theme: Theme,
    paginate: bool,
    title: Option<String>,
    output: String,
    list_stack: Vec<bool>,
    code: CodeFence,
    table: TableTracker,
    heading: HeadingTracker,
    /// Alt text buffer, `Some` while inside an image.
    image_alt: Option<String>,
    pending_image: Option<(String, String)>,
    slide_count: usize,
}

impl<'r> DeckWalker<'r> {
    fn new(renderer: &'r SlideRenderer, directives: FrontMatter) -> Self {
        let theme = match directives.theme.as_deref() {
            Some(name) => Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme = name, "Ignoring unknown front matter theme");
                renderer.theme
            }),
            None => renderer.theme,
        };

        Self {
            renderer,
            theme,
            paginate: directives.paginate.unwrap_or(renderer.options.paginate),
            title: directives.title,
            output: String::with_capacity(4096),
            list_stack: Vec::new(),
            code: CodeFence::default(),
            table: TableTracker::default(),
            heading: HeadingTracker::default(),
            image_alt: None,
            pending_image: None,
            slide_count: 0,
        }
    }

    fn render<'a, I>(mut self, events: I) -> Result<RenderResult, RenderError>
    where
        I: Iterator<Item = Event<'a>>,
    {
        self.open_slide();
        for event in events {
            self.process_event(event)?;
        }
        self.output.push_str("</section>");

        let title = self.title.take().or_else(|| self.heading.take_title());
        Ok(RenderResult {
            html: self.output,
            css: self.theme.css().to_owned(),
            title,
            slide_count: self.slide_count,
        })
    }

    fn open_slide(&mut self) {
        self.slide_count += 1;
        if self.paginate {
            write!(
                self.output,
                r#"<section class="slide" data-page="{}">"#,
                self.slide_count
            )
            .unwrap();
        } else {
            self.output.push_str(r#"<section class="slide">"#);
        }
    }

    /// Thematic break: close the current slide and start the next.
    fn break_slide(&mut self) {
        self.output.push_str("</section>");
        self.open_slide();
    }

    fn process_event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag)?,
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.break_slide(),
            Event::TaskListMarker(checked) => self.task_list_marker(checked),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
        Ok(())
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the id is known.
                self.heading.begin(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => {
                self.output.push_str("<blockquote>");
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => {
                        info.split_whitespace().next().map(str::to_owned)
                    }
                    _ => None,
                };
                self.code.begin(lang);
            }
            Tag::List(start) => {
                self.list_stack.push(start.is_some());
                match start {
                    Some(1) => self.output.push_str("<ol>"),
                    Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                    None => self.output.push_str("<ul>"),
                }
            }
            Tag::Item => {
                self.output.push_str("<li>");
            }
            Tag::Table(alignments) => {
                self.table.begin(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.begin_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.begin_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.alignment_style();
                let cell = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{cell}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link { dest_url, .. } => {
                let link = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Start collecting alt text; the tag is written in end_tag.
                self.image_alt = Some(String::new());
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) -> Result<(), RenderError> {
        match tag {
            TagEnd::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(_) => {
                if let Some((level, id, html)) = self.heading.finish() {
                    write!(
                        self.output,
                        r#"<h{level} id="{id}">{}</h{level}>"#,
                        html.trim()
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => {
                self.output.push_str("</blockquote>");
            }
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.finish();
                self.code_block(lang.as_deref(), &content)?;
            }
            TagEnd::List(ordered) => {
                self.list_stack.pop();
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => {
                self.output.push_str("</li>");
            }
            TagEnd::Table => {
                self.output.push_str("</tbody></table>");
            }
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => {
                self.output.push_str("</tr>");
            }
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                let alt = self.image_alt.take().unwrap_or_default();
                if let Some((src, title)) = self.pending_image.take() {
                    self.image(&src, &alt, &title);
                }
            }
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {}
        }
        Ok(())
    }

    /// Render one fenced code block through the hook.
    ///
    /// The hook is called once per block with the content and the declared
    /// language tag; its markup is embedded verbatim. Hook failures abort
    /// the render.
    fn code_block(&mut self, lang: Option<&str>, content: &str) -> Result<(), RenderError> {
        let body = match &self.renderer.highlighter {
            Some(hook) => hook.highlight(content, lang)?,
            None => escape_html(content),
        };
        if let Some(lang) = lang {
            write!(
                self.output,
                r#"<pre><code class="language-{}">{body}</code></pre>"#,
                escape_html(lang)
            )
            .unwrap();
        } else {
            write!(self.output, "<pre><code>{body}</code></pre>").unwrap();
        }
        Ok(())
    }

    fn image(&mut self, src: &str, alt: &str, title: &str) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            self.output,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(code);
        } else if self.heading.is_active() {
            self.heading.push_text(code);
            self.heading
                .push_html(&format!("<code>{}</code>", escape_html(code)));
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn raw_html(&mut self, html: &str) {
        if self.renderer.options.allow_html {
            self.push_inline(html);
        } else {
            self.push_inline(&escape_html(html));
        }
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else {
            self.output.push('\n');
        }
    }

    fn task_list_marker(&mut self, checked: bool) {
        self.output.push_str(if checked {
            r#"<input type="checkbox" checked disabled> "#
        } else {
            r#"<input type="checkbox" disabled> "#
        });
    }
}
