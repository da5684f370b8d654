// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # glyphscope
//!
//! Font statistics and annotated HTML rendering for glyph-level PDF layout
//! models.
//!
//! A PDF layout engine produces one record per glyph with a raw font name and
//! a noisy floating point size. A structure analyzer then marks lines as
//! footnotes, page numbers or paragraphs and single characters as footnote
//! citations or list item markers. This crate sits downstream of both:
//!
//! - **Font identity**: [`fonts::FontSize`] quantizes sizes to a tenth of a
//!   point in decimal arithmetic so noisy observations compare equal, and
//!   [`layout::CharArena`] memoizes it per glyph for as long as the glyph lives
//! - **Statistics**: [`fonts::FontSizeStats`] counts glyphs per font size
//! - **Rendering**: [`converters::HtmlConverter`] renders the analyzed
//!   document as HTML with style classes, footnote anchors and citation links
//!
//! ## Quick Start
//!
//! ```
//! use glyphscope::config::RenderConfig;
//! use glyphscope::converters::HtmlConverter;
//! use glyphscope::document::{CharAnnotation, DocChar, Document, Line, Page};
//! use glyphscope::fonts::FontSizeStats;
//! use glyphscope::layout::{CharArena, LayoutChar, LayoutNode, LayoutPage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut arena = CharArena::new();
//! let a = arena.insert(LayoutChar::new("A", "Times-Roman", 11.999999999));
//! let b = arena.insert(LayoutChar::new("1", "Times-Roman", 6.0000001));
//!
//! let layout = vec![LayoutPage::new(1, vec![LayoutNode::Char(a), LayoutNode::Char(b)])];
//! let stats = FontSizeStats::collect(&arena, &layout);
//! assert_eq!(stats.report(5), vec!["Times-Roman 12.0: 1", "Times-Roman 6.0: 1"]);
//!
//! let line = Line::new(vec![
//!     DocChar::new(a),
//!     DocChar::new(b).with_annotation(CharAnnotation::FootnoteCitation(1)),
//! ]);
//! let doc = Document::new("paper.pdf", vec![Page::new(1, vec![line])]);
//! let html = HtmlConverter::new().convert_document(&doc, &arena, &RenderConfig::default())?;
//! assert!(html.contains(r##"href="#footnote-1""##));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Font identity and statistics
pub mod fonts;

// Layout model
pub mod layout;

// Analyzed document model
pub mod document;

// Format converters
pub mod converters;

// Interchange format
pub mod dump;

// Re-exports
pub use config::RenderConfig;
pub use converters::HtmlConverter;
pub use document::{CharAnnotation, Document, Line, LineAnnotation, Page};
pub use error::{Error, Result};
pub use fonts::{FontName, FontSize, FontSizeStats};
pub use layout::{CharArena, CharId, LayoutChar};
