//! Font usage statistics.
//!
//! Counts how many glyphs of a document use each [`FontSize`]. The most
//! common entry is usually the body text, which makes this a quick first look
//! at an unfamiliar document.

use crate::fonts::FontSize;
use crate::layout::{CharArena, LayoutPage, iter_chars};
use indexmap::IndexMap;

/// Occurrence counts per font size, in first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct FontSizeStats {
    counts: IndexMap<FontSize, usize>,
}

impl FontSizeStats {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character reachable from `pages`.
    ///
    /// Characters whose handle is no longer live in `arena` are skipped.
    pub fn collect(arena: &CharArena, pages: &[LayoutPage]) -> Self {
        let mut stats = Self::new();
        let mut skipped = 0usize;

        for id in iter_chars(pages) {
            match arena.font_size(id) {
                Some(font_size) => stats.add(font_size.clone()),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("skipped {} stale character handles", skipped);
        }
        log::debug!(
            "collected {} distinct font sizes over {} characters",
            stats.len(),
            stats.total()
        );
        stats
    }

    /// Record one occurrence.
    pub fn add(&mut self, font_size: FontSize) {
        *self.counts.entry(font_size).or_insert(0) += 1;
    }

    /// Count for a given font size.
    pub fn count(&self, font_size: &FontSize) -> usize {
        self.counts.get(font_size).copied().unwrap_or(0)
    }

    /// Number of distinct font sizes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted characters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&FontSize, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// The `n` most common font sizes, highest count first.
    ///
    /// Ties keep first-encountered order.
    pub fn most_common(&self, n: usize) -> Vec<(&FontSize, usize)> {
        let mut entries: Vec<(&FontSize, usize)> = self.iter().collect();
        // stable sort keeps insertion order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// Report lines `"<font> <size>: <count>"` for the `n` most common sizes.
    pub fn report(&self, n: usize) -> Vec<String> {
        self.most_common(n)
            .into_iter()
            .map(|(font_size, count)| format!("{}: {}", font_size, count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutChar, LayoutNode};

    fn page_of(arena: &mut CharArena, number: u32, glyphs: &[(&str, f64)]) -> LayoutPage {
        let nodes = glyphs
            .iter()
            .map(|(font, size)| LayoutNode::Char(arena.insert(LayoutChar::new("x", *font, *size))))
            .collect();
        LayoutPage::new(number, vec![LayoutNode::Container(nodes)])
    }

    #[test]
    fn test_collect_counts() {
        let mut arena = CharArena::new();
        let pages = vec![
            page_of(&mut arena, 1, &[("Times", 12.0), ("Times", 12.00001), ("Arial", 8.0)]),
            page_of(&mut arena, 2, &[("Times", 11.99999), ("Arial", 8.0)]),
        ];

        let stats = FontSizeStats::collect(&arena, &pages);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.count(&FontSize::new("Times", 12.0)), 3);
        assert_eq!(stats.count(&FontSize::new("Arial", 8.0)), 2);
        assert_eq!(stats.count(&FontSize::new("Courier", 8.0)), 0);
    }

    #[test]
    fn test_most_common_ties_keep_order() {
        let mut stats = FontSizeStats::new();
        stats.add(FontSize::new("B", 10.0));
        stats.add(FontSize::new("A", 10.0));
        stats.add(FontSize::new("C", 10.0));
        stats.add(FontSize::new("C", 10.0));

        let top = stats.most_common(3);
        let names: Vec<&str> = top.iter().map(|(fs, _)| fs.font().as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_most_common_truncates() {
        let mut stats = FontSizeStats::new();
        for i in 0..8 {
            stats.add(FontSize::new("Times", 8.0 + i as f64));
        }
        assert_eq!(stats.most_common(5).len(), 5);
        assert_eq!(stats.most_common(20).len(), 8);
        assert!(stats.most_common(0).is_empty());
    }

    #[test]
    fn test_report_format() {
        let mut stats = FontSizeStats::new();
        stats.add(FontSize::new("Times-Roman", 12.0));
        stats.add(FontSize::new("Times-Roman", 12.0));
        stats.add(FontSize::new("Times-Bold", 16.164));

        assert_eq!(
            stats.report(5),
            vec!["Times-Roman 12.0: 2".to_string(), "Times-Bold 16.2: 1".to_string()]
        );
    }

    #[test]
    fn test_collect_skips_removed_chars() {
        let mut arena = CharArena::new();
        let keep = arena.insert(LayoutChar::new("a", "Times", 12.0));
        let gone = arena.insert(LayoutChar::new("b", "Times", 12.0));
        arena.remove(gone);

        let pages = vec![LayoutPage::new(1, vec![LayoutNode::Char(keep), LayoutNode::Char(gone)])];
        let stats = FontSizeStats::collect(&arena, &pages);
        assert_eq!(stats.total(), 1);
    }
}
