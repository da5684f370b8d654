//! Glyph-level layout model consumed from the layout engine.
//!
//! - [`CharArena`]: owner of raw characters, with memoized font sizes
//! - [`LayoutPage`] / [`LayoutNode`]: the nested page tree
//! - [`iter_chars`]: document-order flattening of that tree

pub mod arena;
pub mod tree;

// Re-export main types
pub use arena::{CharArena, CharId, LayoutChar};
pub use tree::{FlattenedChars, LayoutNode, LayoutPage, iter_chars};
