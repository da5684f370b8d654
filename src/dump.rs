//! JSON interchange format for layout and analysis output.
//!
//! The layout engine and the structure analyzer live outside this crate. They
//! hand their results over as a single JSON "layout dump":
//!
//! ```json
//! {
//!   "filename": "paper.pdf",
//!   "chars": [
//!     { "text": "H", "fontname": "Times-Bold", "size": 16.163999999999987 },
//!     { "text": "1", "fontname": "Times-Roman", "size": 6.0, "underlined": false }
//!   ],
//!   "pages": [
//!     {
//!       "number": 1,
//!       "layout": [ { "container": [ { "char": 0 }, { "anno": " " }, { "char": 1 } ] } ],
//!       "lines": [
//!         {
//!           "annotation": { "paragraph": "p1" },
//!           "chars": [ { "index": 0 }, { "index": 1, "annotation": { "footnote_citation": 1 } } ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Characters are stored once and referenced by index from both the layout
//! tree and the analyzed lines.

use crate::document::{CharAnnotation, DocChar, Document, Line, LineAnnotation, Page};
use crate::error::{Error, Result};
use crate::layout::{CharArena, CharId, LayoutChar, LayoutNode, LayoutPage};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Top level of a layout dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDump {
    /// Name of the source PDF
    #[serde(default)]
    pub filename: String,
    /// Every glyph of the document
    #[serde(default)]
    pub chars: Vec<LayoutChar>,
    /// Per-page layout tree and analyzed lines
    #[serde(default)]
    pub pages: Vec<PageDump>,
}

/// One page of a layout dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDump {
    /// 1-based page number
    pub number: u32,
    /// Layout tree as produced by the layout engine
    #[serde(default)]
    pub layout: Vec<NodeDump>,
    /// Lines as produced by the structure analyzer
    #[serde(default)]
    pub lines: Vec<LineDump>,
}

/// Layout tree node referencing characters by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeDump {
    /// Index into [`LayoutDump::chars`]
    Char(usize),
    /// Nested nodes
    Container(Vec<NodeDump>),
    /// Virtual text without a font
    Anno(String),
}

/// An analyzed line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDump {
    /// Line-level annotation
    #[serde(default)]
    pub annotation: Option<LineAnnotation>,
    /// Characters of the line
    #[serde(default)]
    pub chars: Vec<CharRefDump>,
}

/// A character reference within an analyzed line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharRefDump {
    /// Index into [`LayoutDump::chars`]
    pub index: usize,
    /// Character-level annotation
    #[serde(default)]
    pub annotation: Option<CharAnnotation>,
}

/// A dump materialized into the crate's models.
#[derive(Debug)]
pub struct LoadedDocument {
    /// Owner of every character
    pub arena: CharArena,
    /// Layout trees, one per page
    pub layout: Vec<LayoutPage>,
    /// Analyzed document
    pub document: Document,
}

impl LayoutDump {
    /// Parse a dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a dump from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Open and parse a dump file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading layout dump from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Materialize the dump.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDump`] if a layout node or line refers to a
    /// character index that does not exist.
    pub fn build(self) -> Result<LoadedDocument> {
        let mut arena = CharArena::with_capacity(self.chars.len());
        let ids: Vec<CharId> = self.chars.into_iter().map(|c| arena.insert(c)).collect();

        let mut layout = Vec::with_capacity(self.pages.len());
        let mut pages = Vec::with_capacity(self.pages.len());

        for page in self.pages {
            let nodes = page
                .layout
                .into_iter()
                .map(|node| build_node(node, &ids))
                .collect::<Result<Vec<_>>>()?;
            layout.push(LayoutPage::new(page.number, nodes));

            let lines = page
                .lines
                .into_iter()
                .map(|line| build_line(line, &ids))
                .collect::<Result<Vec<_>>>()?;
            pages.push(Page::new(page.number, lines));
        }

        log::debug!(
            "built {} chars over {} pages from {}",
            arena.len(),
            pages.len(),
            self.filename
        );

        Ok(LoadedDocument {
            arena,
            layout,
            document: Document::new(self.filename, pages),
        })
    }
}

fn lookup(ids: &[CharId], index: usize) -> Result<CharId> {
    ids.get(index).copied().ok_or_else(|| {
        Error::InvalidDump(format!("char index {} out of range ({} chars)", index, ids.len()))
    })
}

fn build_node(node: NodeDump, ids: &[CharId]) -> Result<LayoutNode> {
    Ok(match node {
        NodeDump::Char(index) => LayoutNode::Char(lookup(ids, index)?),
        NodeDump::Container(children) => LayoutNode::Container(
            children
                .into_iter()
                .map(|child| build_node(child, ids))
                .collect::<Result<Vec<_>>>()?,
        ),
        NodeDump::Anno(text) => LayoutNode::Anno(text),
    })
}

fn build_line(line: LineDump, ids: &[CharId]) -> Result<Line> {
    let chars = line
        .chars
        .into_iter()
        .map(|c| -> Result<DocChar> {
            Ok(DocChar {
                id: lookup(ids, c.index)?,
                annotation: c.annotation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Line {
        annotation: line.annotation,
        chars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "filename": "paper.pdf",
        "chars": [
            { "text": "H", "fontname": "Times-Bold", "size": 16.163999999999987 },
            { "text": "i", "fontname": "Times-Bold", "size": 16.164000000000044 },
            { "text": "1", "fontname": "Times-Roman", "size": 6.0, "underlined": true }
        ],
        "pages": [
            {
                "number": 1,
                "layout": [ { "container": [ { "char": 0 }, { "char": 1 }, { "anno": " " }, { "char": 2 } ] } ],
                "lines": [
                    {
                        "annotation": { "paragraph": "p1" },
                        "chars": [
                            { "index": 0 },
                            { "index": 1 },
                            { "index": 2, "annotation": { "footnote_citation": 1 } }
                        ]
                    },
                    { "annotation": "page_number", "chars": [] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let loaded = LayoutDump::from_slice(SAMPLE.as_bytes()).unwrap().build().unwrap();

        assert_eq!(loaded.arena.len(), 3);
        assert_eq!(loaded.layout.len(), 1);
        assert_eq!(loaded.document.filename, "paper.pdf");

        let lines = &loaded.document.pages[0].lines;
        assert_eq!(lines[0].annotation, Some(LineAnnotation::Paragraph("p1".into())));
        assert_eq!(lines[1].annotation, Some(LineAnnotation::PageNumber));
        assert_eq!(
            lines[0].chars[2].annotation,
            Some(CharAnnotation::FootnoteCitation(1))
        );
        assert_eq!(lines[0].text(&loaded.arena), "Hi1");

        let underlined = loaded.arena.get(lines[0].chars[2].id).unwrap();
        assert!(underlined.underlined);
    }

    #[test]
    fn test_missing_fields_default() {
        let dump = LayoutDump::from_slice(br#"{ "chars": [ { "text": "x" } ] }"#).unwrap();
        assert_eq!(dump.filename, "");
        assert_eq!(dump.chars[0].fontname, "");
        assert_eq!(dump.chars[0].size, 0.0);
        assert!(dump.pages.is_empty());
    }

    #[test]
    fn test_dangling_layout_index() {
        let dump = LayoutDump::from_slice(
            br#"{ "chars": [], "pages": [ { "number": 1, "layout": [ { "char": 4 } ] } ] }"#,
        )
        .unwrap();
        match dump.build() {
            Err(Error::InvalidDump(msg)) => assert!(msg.contains("char index 4")),
            other => panic!("expected InvalidDump, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_line_index() {
        let dump = LayoutDump::from_slice(
            br#"{ "chars": [], "pages": [ { "number": 1, "lines": [ { "chars": [ { "index": 0 } ] } ] } ] }"#,
        )
        .unwrap();
        assert!(matches!(dump.build(), Err(Error::InvalidDump(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(LayoutDump::from_slice(b"{ not json"), Err(Error::Json(_))));
    }
}
