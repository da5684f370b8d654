//! Output converters for analyzed documents.
//!
//! - **HTML**: annotated rendering with footnote cross-references
//!
//! # Examples
//!
//! ```no_run
//! use glyphscope::config::RenderConfig;
//! use glyphscope::converters::HtmlConverter;
//! use glyphscope::dump::LayoutDump;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = LayoutDump::from_path("paper.json")?.build()?;
//! let html = HtmlConverter::new().convert_document(
//!     &loaded.document,
//!     &loaded.arena,
//!     &RenderConfig::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod html;

// Re-export main types
pub use html::{FootnoteRegistry, HtmlConverter, escape_html, footnote_anchor_id};
