//! Font names and the style traits derived from them.
//!
//! PDF layout engines report the raw `BaseFont` name of each glyph, e.g.
//! `Times-BoldItalic` or `ABCDEF+Helvetica-Oblique`. Bold, italic and
//! sans-serif are recovered from the name alone by pattern matching.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

lazy_static! {
    static ref RE_BOLD: Regex = Regex::new(r"(?i)bold").unwrap();
    static ref RE_ITALIC: Regex = Regex::new(r"(?i)(italic|oblique)").unwrap();
    static ref RE_SANS_SERIF: Regex = Regex::new(
        r"(?i)(sans|arial|helvetica|verdana|tahoma|calibri|futura|frutiger|univers|gothic)"
    )
    .unwrap();
    /// Subset tag prepended to embedded font subsets (ISO 32000-1:2008, 9.6.4)
    static ref RE_SUBSET_TAG: Regex = Regex::new(r"^[A-Z]{6}\+").unwrap();
}

/// An immutable font name as reported by the layout engine.
///
/// Empty or otherwise odd names are kept verbatim; nothing about a font name
/// is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontName(String);

impl FontName {
    /// Wrap a raw font name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name without a subset tag.
    ///
    /// ```
    /// use glyphscope::fonts::FontName;
    ///
    /// assert_eq!(FontName::new("ABCDEF+Times-Bold").base_name(), "Times-Bold");
    /// assert_eq!(FontName::new("Times-Bold").base_name(), "Times-Bold");
    /// ```
    pub fn base_name(&self) -> &str {
        match RE_SUBSET_TAG.find(&self.0) {
            Some(m) => &self.0[m.end()..],
            None => &self.0,
        }
    }

    /// True if the name mentions "bold" in any case.
    ///
    /// ```
    /// use glyphscope::fonts::FontName;
    ///
    /// assert!(!FontName::new("Times").is_bold());
    /// assert!(FontName::new("Times Bold").is_bold());
    /// ```
    pub fn is_bold(&self) -> bool {
        RE_BOLD.is_match(&self.0)
    }

    /// True if the name mentions "italic" or "oblique" in any case.
    ///
    /// ```
    /// use glyphscope::fonts::FontName;
    ///
    /// assert!(!FontName::new("Times").is_italic());
    /// assert!(FontName::new("Times Italic").is_italic());
    /// assert!(FontName::new("Times Oblique").is_italic());
    /// ```
    pub fn is_italic(&self) -> bool {
        RE_ITALIC.is_match(&self.0)
    }

    /// True if the name belongs to a well-known sans-serif family.
    pub fn is_sans_serif(&self) -> bool {
        RE_SANS_SERIF.is_match(&self.0)
    }
}

impl Deref for FontName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FontName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FontName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for FontName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
