//! Annotated document model.
//!
//! This is the shape of the structure analyzer's output: pages of lines, each
//! line made of characters from a [`CharArena`], with optional semantic
//! annotations on lines (footnotes, page numbers, paragraphs) and on single
//! characters (footnote citations, list item markers). The analyzer decides
//! what gets annotated; this crate only consumes the result.

use crate::fonts::FontSize;
use crate::layout::{CharArena, CharId, LayoutChar};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Peekable;

/// Annotation attached to a whole line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAnnotation {
    /// Line belongs to the definition of footnote `n`
    Footnote(u32),
    /// Line is a running page number
    PageNumber,
    /// Line belongs to the paragraph with this id
    Paragraph(String),
    /// Any other annotation, carried as its textual representation
    Other(String),
}

impl fmt::Display for LineAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAnnotation::Footnote(n) => write!(f, "footnote {}", n),
            LineAnnotation::PageNumber => f.write_str("page number"),
            LineAnnotation::Paragraph(id) => write!(f, "paragraph {}", id),
            LineAnnotation::Other(repr) => f.write_str(repr),
        }
    }
}

/// Annotation attached to a single character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharAnnotation {
    /// Superscript citation of footnote `n`
    FootnoteCitation(u32),
    /// Bullet or enumerator of a list item, with its marker text
    ListItemMarker(String),
    /// Any other annotation, carried as its textual representation
    Other(String),
}

impl fmt::Display for CharAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharAnnotation::FootnoteCitation(n) => write!(f, "footnote citation {}", n),
            CharAnnotation::ListItemMarker(marker) => write!(f, "list item marker {}", marker),
            CharAnnotation::Other(repr) => f.write_str(repr),
        }
    }
}

/// A character of a line: a handle into the arena plus its annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct DocChar {
    /// Handle of the underlying layout character
    pub id: CharId,
    /// Character-level annotation, if any
    pub annotation: Option<CharAnnotation>,
}

impl DocChar {
    /// An unannotated character.
    pub fn new(id: CharId) -> Self {
        Self {
            id,
            annotation: None,
        }
    }

    /// Attach an annotation.
    pub fn with_annotation(mut self, annotation: CharAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

/// A line of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Line-level annotation, if any
    pub annotation: Option<LineAnnotation>,
    /// Characters in reading order
    pub chars: Vec<DocChar>,
}

impl Line {
    /// An unannotated line.
    pub fn new(chars: Vec<DocChar>) -> Self {
        Self {
            annotation: None,
            chars,
        }
    }

    /// Attach an annotation.
    pub fn with_annotation(mut self, annotation: LineAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Maximal runs of characters sharing font size, underline and annotation.
    ///
    /// The iterator is lazy; call again to restart.
    pub fn char_runs<'a>(&'a self, arena: &'a CharArena) -> CharRuns<'a> {
        CharRuns {
            arena,
            chars: self.chars.iter().peekable(),
        }
    }

    /// Plain text of the line.
    pub fn text(&self, arena: &CharArena) -> String {
        self.chars
            .iter()
            .filter_map(|c| arena.get(c.id))
            .map(|c| c.text.as_str())
            .collect()
    }
}

/// A page of lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Lines in reading order
    pub lines: Vec<Line>,
}

impl Page {
    /// Create a page.
    pub fn new(number: u32, lines: Vec<Line>) -> Self {
        Self { number, lines }
    }
}

/// An analyzed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Name of the source file, used for the rendered title
    pub filename: String,
    /// Pages in order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document.
    pub fn new(filename: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            filename: filename.into(),
            pages,
        }
    }

    /// Iterate over all lines of all pages.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }
}

/// A run of characters rendered with the same attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct CharRun<'a> {
    /// First character of the run; all others share its attributes
    pub first: &'a LayoutChar,
    /// Resolved font size of the run
    pub font_size: &'a FontSize,
    /// Annotation shared by the run
    pub annotation: Option<&'a CharAnnotation>,
    /// Concatenated text of the run
    pub text: String,
}

impl CharRun<'_> {
    /// Whether the run is underlined.
    pub fn is_underlined(&self) -> bool {
        self.first.underlined
    }
}

/// Iterator returned by [`Line::char_runs`].
#[derive(Debug)]
pub struct CharRuns<'a> {
    arena: &'a CharArena,
    chars: Peekable<std::slice::Iter<'a, DocChar>>,
}

impl<'a> CharRuns<'a> {
    fn resolve(&self, doc_char: &DocChar) -> Option<(&'a LayoutChar, &'a FontSize)> {
        let arena = self.arena;
        let resolved = arena.get(doc_char.id).zip(arena.font_size(doc_char.id));
        if resolved.is_none() {
            log::warn!("skipping stale character handle {}", doc_char.id.index());
        }
        resolved
    }
}

impl<'a> Iterator for CharRuns<'a> {
    type Item = CharRun<'a>;

    fn next(&mut self) -> Option<CharRun<'a>> {
        let (head, first, font_size) = loop {
            let doc_char = self.chars.next()?;
            if let Some((record, font_size)) = self.resolve(doc_char) {
                break (doc_char, record, font_size);
            }
        };

        let mut text = first.text.clone();
        loop {
            let doc_char: &'a DocChar = match self.chars.peek() {
                Some(doc_char) => *doc_char,
                None => break,
            };
            match self.resolve(doc_char) {
                Some((record, fs))
                    if fs == font_size
                        && record.underlined == first.underlined
                        && doc_char.annotation == head.annotation =>
                {
                    text.push_str(&record.text);
                },
                Some(_) => break,
                None => {},
            }
            self.chars.next();
        }

        Some(CharRun {
            first,
            font_size,
            annotation: head.annotation.as_ref(),
            text,
        })
    }
}
