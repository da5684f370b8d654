//! Font identity and usage statistics.
//!
//! - [`FontName`]: raw font name with bold/italic/sans-serif classification
//! - [`FontSize`]: canonical, hashable (font, size) pair
//! - [`FontSizeStats`]: per-identity glyph counts

pub mod font_name;
pub mod font_size;
pub mod stats;

pub use font_name::FontName;
pub use font_size::{FontSize, SIZE_SCALE, quantize_size};
pub use stats::FontSizeStats;
