//! Canonical (font, size) identities.
//!
//! Layout engines report glyph sizes as binary floats computed from text
//! matrices, so the same nominal size comes out as e.g. `16.163999999999987`
//! on one glyph and `16.164000000000044` on the next. [`FontSize`] quantizes
//! the size to the nearest tenth of a point in decimal arithmetic so those
//! observations compare and hash equal.

use crate::fonts::FontName;
use crate::layout::LayoutChar;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Number of decimal places kept on a quantized size.
pub const SIZE_SCALE: u32 = 1;

/// Quantize a raw size to the nearest tenth of a point.
///
/// The exact binary value of `raw` is converted to a decimal first and then
/// rounded half-to-even, so no float rounding happens along the way. The
/// result always carries one decimal place (`12` becomes `12.0`).
/// Non-finite or out-of-range sizes quantize to `0.0`.
pub fn quantize_size(raw: f64) -> Decimal {
    let mut size = Decimal::from_f64_retain(raw)
        .unwrap_or_default()
        .round_dp_with_strategy(SIZE_SCALE, RoundingStrategy::MidpointNearestEven);
    if size.is_zero() {
        // drop any sign carried over from -0.0 or tiny negatives
        return Decimal::new(0, SIZE_SCALE);
    }
    size.rescale(SIZE_SCALE);
    size
}

/// An immutable font/size pair used as a map key and grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontSize {
    font: FontName,
    size: Decimal,
}

impl FontSize {
    /// Build an identity from a raw font name and a raw size.
    pub fn new(font: impl Into<FontName>, raw_size: f64) -> Self {
        Self {
            font: font.into(),
            size: quantize_size(raw_size),
        }
    }

    /// Resolve the identity of a layout character.
    ///
    /// Callers that see the same character repeatedly should go through
    /// [`CharArena::font_size`](crate::layout::CharArena::font_size), which
    /// memoizes this per record.
    pub fn from_char(ch: &LayoutChar) -> Self {
        Self::new(ch.fontname.as_str(), ch.size)
    }

    /// The font name.
    pub fn font(&self) -> &FontName {
        &self.font
    }

    /// The quantized size in points.
    pub fn size(&self) -> Decimal {
        self.size
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.font, self.size)
    }
}
