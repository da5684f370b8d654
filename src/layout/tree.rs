//! Nested layout tree produced by the layout engine.
//!
//! Pages hold containers (text boxes, lines, figures) which in turn hold
//! characters and virtual whitespace. Statistics only care about the
//! characters, so [`iter_chars`] flattens the tree in document order.

use crate::layout::CharId;

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// A real glyph
    Char(CharId),
    /// A container of further nodes (text box, text line, figure)
    Container(Vec<LayoutNode>),
    /// Virtual text inserted by the layout engine (spaces, newlines) with no font
    Anno(String),
}

/// One page of layout output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutPage {
    /// 1-based page number
    pub number: u32,
    /// Top level nodes in document order
    pub nodes: Vec<LayoutNode>,
}

impl LayoutPage {
    /// Create a page.
    pub fn new(number: u32, nodes: Vec<LayoutNode>) -> Self {
        Self { number, nodes }
    }
}

/// Depth-first iterator over the characters of a set of pages.
#[derive(Debug)]
pub struct FlattenedChars<'a> {
    stack: Vec<std::slice::Iter<'a, LayoutNode>>,
}

impl<'a> Iterator for FlattenedChars<'a> {
    type Item = CharId;

    fn next(&mut self) -> Option<CharId> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(LayoutNode::Char(id)) => return Some(*id),
                Some(LayoutNode::Container(children)) => self.stack.push(children.iter()),
                Some(LayoutNode::Anno(_)) => {},
                None => {
                    self.stack.pop();
                },
            }
        }
        None
    }
}

/// Flatten pages into their characters, in document order.
pub fn iter_chars(pages: &[LayoutPage]) -> FlattenedChars<'_> {
    // pages are pushed in reverse so the first page is on top
    let stack = pages.iter().rev().map(|p| p.nodes.iter()).collect();
    FlattenedChars { stack }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CharArena, LayoutChar};

    #[test]
    fn test_flatten_nested() {
        let mut arena = CharArena::new();
        let ids: Vec<CharId> = "abcde"
            .chars()
            .map(|c| arena.insert(LayoutChar::new(c.to_string(), "Times", 12.0)))
            .collect();

        let pages = vec![
            LayoutPage::new(
                1,
                vec![
                    LayoutNode::Container(vec![
                        LayoutNode::Char(ids[0]),
                        LayoutNode::Container(vec![LayoutNode::Char(ids[1])]),
                        LayoutNode::Anno(" ".to_string()),
                    ]),
                    LayoutNode::Char(ids[2]),
                ],
            ),
            LayoutPage::new(2, vec![]),
            LayoutPage::new(
                3,
                vec![LayoutNode::Container(vec![
                    LayoutNode::Char(ids[3]),
                    LayoutNode::Char(ids[4]),
                ])],
            ),
        ];

        let flat: Vec<CharId> = iter_chars(&pages).collect();
        assert_eq!(flat, ids);
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(iter_chars(&[]).count(), 0);
        let pages = vec![LayoutPage::new(1, vec![LayoutNode::Container(vec![])])];
        assert_eq!(iter_chars(&pages).count(), 0);
    }
}
