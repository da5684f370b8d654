//! Arena of raw layout characters with per-record font size memoization.
//!
//! Every glyph the layout engine produces lives in a [`CharArena`] slot and
//! is referred to by a generational [`CharId`]. Resolving a character's
//! [`FontSize`] is memoized inside the slot, so the memo entry lives exactly
//! as long as the character does: removing the character drops the entry,
//! and a stale id whose slot has been reused never sees the new occupant.

use crate::fonts::FontSize;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// A single glyph as produced by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutChar {
    /// Text of the glyph (more than one char for ligatures)
    pub text: String,
    /// Raw font name, may be empty
    #[serde(default)]
    pub fontname: String,
    /// Raw font size in points, as computed by the layout engine
    #[serde(default)]
    pub size: f64,
    /// Bounding box `[x0, y0, x1, y1]` in PDF user space
    #[serde(default)]
    pub bbox: [f64; 4],
    /// Whether the glyph is underlined
    #[serde(default)]
    pub underlined: bool,
}

impl LayoutChar {
    /// Create a character with a zero bounding box and no underline.
    pub fn new(text: impl Into<String>, fontname: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            fontname: fontname.into(),
            size,
            bbox: [0.0; 4],
            underlined: false,
        }
    }

    /// Set the underline flag.
    pub fn with_underline(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: [f64; 4]) -> Self {
        self.bbox = bbox;
        self
    }
}

/// Stable handle to a character in a [`CharArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharId {
    index: u32,
    generation: u32,
}

impl CharId {
    /// Slot index, for diagnostics.
    pub fn index(&self) -> u32 {
        self.index
    }
}

#[derive(Debug)]
struct Entry {
    record: LayoutChar,
    font_size: OnceCell<FontSize>,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Owner of all layout characters of a document.
#[derive(Debug, Default)]
pub struct CharArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl CharArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with room for `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Add a character and return its handle.
    pub fn insert(&mut self, record: LayoutChar) -> CharId {
        let entry = Entry {
            record,
            font_size: OnceCell::new(),
        };
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(entry);
            return CharId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        CharId {
            index,
            generation: 0,
        }
    }

    /// Remove a character, dropping its memoized font size.
    ///
    /// Returns the record, or `None` if `id` is stale.
    pub fn remove(&mut self, id: CharId) -> Option<LayoutChar> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(entry.record)
    }

    fn entry(&self, id: CharId) -> Option<&Entry> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    /// Look up a live character.
    pub fn get(&self, id: CharId) -> Option<&LayoutChar> {
        self.entry(id).map(|e| &e.record)
    }

    /// True if `id` refers to a live character.
    pub fn contains(&self, id: CharId) -> bool {
        self.entry(id).is_some()
    }

    /// Resolve the font size of a live character.
    ///
    /// Computed on the first call for `id` and returned from the slot on
    /// every later call. Stale ids yield `None`.
    pub fn font_size(&self, id: CharId) -> Option<&FontSize> {
        let entry = self.entry(id)?;
        Some(entry.font_size.get_or_init(|| {
            log::trace!("resolving font size for char {}", id.index);
            FontSize::from_char(&entry.record)
        }))
    }

    /// Number of live characters whose font size has been resolved.
    pub fn memoized_count(&self) -> usize {
        self.slots
            .iter()
            .filter_map(|s| s.entry.as_ref())
            .filter(|e| e.font_size.get().is_some())
            .count()
    }

    /// Number of live characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the arena holds no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over live characters in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (CharId, &LayoutChar)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entry.as_ref().map(|e| {
                (
                    CharId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    &e.record,
                )
            })
        })
    }
}
