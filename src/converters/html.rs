//! Annotated HTML rendering.
//!
//! Renders an analyzed [`Document`] into a single self-contained HTML page
//! that makes the analyzer's decisions visible: one `<div>` per line, one
//! `<span>` per run of identically styled characters, CSS classes for font
//! traits and for the semantic annotations, and footnote citations linked to
//! the first line of the footnote they cite.

use crate::config::RenderConfig;
use crate::document::{CharAnnotation, CharRun, Document, Line, LineAnnotation};
use crate::error::{Error, Result};
use crate::layout::CharArena;
use indexmap::IndexSet;

/// Doctype and embedded style rules emitted before the title.
pub const HTML_INTRO: &str = r#"<!DOCTYPE html>
<meta charset="utf-8">
<style>
html {
    white-space: pre;
    font: serif;
}

.underline {
    text-decoration: underline;
}

.bold {
    font-weight: bold;
}

.italic {
    font-style: italic;
}

.sans-serif {
    font-family: sans-serif;
}

.footnote-citation {
    vertical-align: super;
}

.footnote {
    border-left: 4px solid gray;
    padding-left: 1em;
}

.page-number {
    color: lightgray;
}

.list-item-marker {
    color: darkgray;
}

.paragraph:before {
    content: "paragraph #" attr(data-id);
    float: right;
}

[data-annotation-repr]:before {
    content: attr(data-annotation-repr);
    float: right;
}
</style>
"#;

/// Anchor id of the first line of footnote `number`.
pub fn footnote_anchor_id(number: u32) -> String {
    format!("footnote-{}", number)
}

/// Footnotes that already received an anchor id during a rendering pass.
///
/// Only the first line of a footnote gets the id, so citations have exactly
/// one target.
#[derive(Debug, Clone, Default)]
pub struct FootnoteRegistry {
    defined: IndexSet<u32>,
}

impl FootnoteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register footnote `number`. Returns true on first registration.
    pub fn register(&mut self, number: u32) -> bool {
        self.defined.insert(number)
    }

    /// True if footnote `number` has an anchor.
    pub fn contains(&self, number: u32) -> bool {
        self.defined.contains(&number)
    }

    /// Registered footnote numbers in definition order.
    pub fn defined(&self) -> impl Iterator<Item = u32> + '_ {
        self.defined.iter().copied()
    }

    /// Number of registered footnotes.
    pub fn len(&self) -> usize {
        self.defined.len()
    }

    /// True if no footnote was registered.
    pub fn is_empty(&self) -> bool {
        self.defined.is_empty()
    }
}

/// Converter from analyzed documents to annotated HTML.
///
/// # Examples
///
/// ```
/// use glyphscope::config::RenderConfig;
/// use glyphscope::converters::HtmlConverter;
/// use glyphscope::document::{DocChar, Document, Line, LineAnnotation, Page};
/// use glyphscope::layout::{CharArena, LayoutChar};
///
/// let mut arena = CharArena::new();
/// let chars = "Note"
///     .chars()
///     .map(|c| DocChar::new(arena.insert(LayoutChar::new(c.to_string(), "Times", 9.0))))
///     .collect();
/// let line = Line::new(chars).with_annotation(LineAnnotation::Footnote(1));
/// let doc = Document::new("paper.pdf", vec![Page::new(1, vec![line])]);
///
/// let html = HtmlConverter::new()
///     .convert_document(&doc, &arena, &RenderConfig::default())
///     .unwrap();
/// assert!(html.contains(r#"id="footnote-1""#));
/// ```
#[derive(Debug, Default)]
pub struct HtmlConverter;

impl HtmlConverter {
    /// Create a new HTML converter.
    pub fn new() -> Self {
        Self
    }

    /// Render a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAnnotation`] if any run carries an annotation
    /// with no HTML presentation. Nothing is returned for the document in
    /// that case.
    pub fn convert_document(
        &self,
        doc: &Document,
        arena: &CharArena,
        config: &RenderConfig,
    ) -> Result<String> {
        let mut footnotes = FootnoteRegistry::new();
        let mut html = String::new();

        if config.stylesheet {
            html.push_str(HTML_INTRO);
        }
        html.push_str(&format!(
            "<title>HTML output for {}</title>\n",
            escape_html(&doc.filename)
        ));

        for page in &doc.pages {
            if config.page_comments {
                html.push_str(&format!("<!-- \n\n*** Page {} ***\n\n -->", page.number));
            }
            for line in &page.lines {
                html.push_str(&self.convert_line(line, arena, &mut footnotes)?);
            }
        }

        log::debug!(
            "rendered {} pages of {} ({} footnote anchors)",
            doc.pages.len(),
            doc.filename,
            footnotes.len()
        );
        Ok(html)
    }

    /// Render one line as a `<div>`.
    ///
    /// `footnotes` carries anchor bookkeeping across lines; pass the same
    /// registry for every line of a document.
    pub fn convert_line(
        &self,
        line: &Line,
        arena: &CharArena,
        footnotes: &mut FootnoteRegistry,
    ) -> Result<String> {
        let attrs = line_attributes(line.annotation.as_ref(), footnotes);

        let mut html = format!("<div{}>", join_attributes(&attrs));
        for run in line.char_runs(arena) {
            html.push_str(&self.convert_run(&run)?);
        }
        html.push_str("</div>");
        Ok(html)
    }

    /// Render one run of characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAnnotation`] for [`CharAnnotation::Other`].
    pub fn convert_run(&self, run: &CharRun<'_>) -> Result<String> {
        let font = run.font_size.font();
        let mut tag = "span";
        let mut classes = Vec::new();
        let mut attrs = vec![format!("style=\"font-size: {}pt\"", run.font_size.size())];

        if run.is_underlined() {
            classes.push("underline");
        }
        if font.is_sans_serif() {
            classes.push("sans-serif");
        }
        if font.is_italic() {
            classes.push("italic");
        }
        if font.is_bold() {
            classes.push("bold");
        }

        match run.annotation {
            Some(CharAnnotation::FootnoteCitation(number)) => {
                classes.push("footnote-citation");
                attrs.push(format!("href=\"#{}\"", footnote_anchor_id(*number)));
                tag = "a";
            },
            Some(annotation @ CharAnnotation::ListItemMarker(_)) => {
                classes.push("list-item-marker");
                attrs.push(format!("title=\"{}\"", escape_html(&annotation.to_string())));
            },
            Some(CharAnnotation::Other(repr)) => {
                return Err(Error::UnknownAnnotation(repr.clone()));
            },
            None => {},
        }

        if !classes.is_empty() {
            attrs.push(format!("class=\"{}\"", classes.join(" ")));
        }

        Ok(format!(
            "<{tag}{}>{}</{tag}>",
            join_attributes(&attrs),
            escape_html(&run.text),
        ))
    }
}

/// Attributes of a line's `<div>`.
///
/// Unknown line annotations are not an error: they are exposed through a
/// generic `data-annotation-repr` attribute.
fn line_attributes(
    annotation: Option<&LineAnnotation>,
    footnotes: &mut FootnoteRegistry,
) -> Vec<String> {
    let mut classes = Vec::new();
    let mut attrs = Vec::new();

    match annotation {
        Some(LineAnnotation::Footnote(number)) => {
            classes.push("footnote");
            attrs.push(format!("title=\"Footnote {}\"", number));
            if footnotes.register(*number) {
                attrs.push(format!("id=\"{}\"", footnote_anchor_id(*number)));
            }
        },
        Some(LineAnnotation::PageNumber) => classes.push("page-number"),
        Some(LineAnnotation::Paragraph(id)) => {
            classes.push("paragraph");
            attrs.push(format!("data-id=\"{}\"", escape_html(id)));
        },
        Some(other @ LineAnnotation::Other(_)) => {
            attrs.push(format!("data-annotation-repr=\"{}\"", escape_html(&other.to_string())));
        },
        None => {},
    }

    if !classes.is_empty() {
        attrs.push(format!("class=\"{}\"", classes.join(" ")));
    }
    attrs
}

fn join_attributes(attrs: &[String]) -> String {
    attrs.iter().map(|a| format!(" {}", a)).collect()
}

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use glyphscope::converters::html::escape_html;
///
/// assert_eq!(escape_html("AT&T <b>"), "AT&amp;T &lt;b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
