//! Ordered, duplicate-free collection of clues gathered during exploration.

use std::{cmp::Ordering, iter::FusedIterator};

use tracing::debug;

/// Binary search tree of clue texts.
///
/// Every node owns its children, so dropping the set releases the whole tree.
/// Inserting a text that is already present leaves the tree unchanged.
#[derive(Debug, Default)]
pub struct ClueSet {
    root: Link,
    len: usize,
}

type Link = Option<Box<ClueEntry>>;

#[derive(Debug)]
struct ClueEntry {
    text: String,
    left: Link,
    right: Link,
}

impl ClueEntry {
    fn leaf(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue, returning `true` if it was not already present.
    ///
    /// Empty texts are ignored. Comparison is exact and case-sensitive.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(ClueEntry::leaf(text));
                    self.len += 1;
                    debug!(clue = text, total = self.len, "Clue recorded");
                    return true;
                }
                Some(node) => match text.cmp(node.text.as_str()) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return false,
                },
            }
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            match text.cmp(node.text.as_str()) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterate over the clues in ascending order.
    ///
    /// The iterator is lazy; calling `iter` again restarts from the smallest clue.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(&self.root);
        iter
    }
}

impl Drop for ClueSet {
    fn drop(&mut self) {
        // Unlink children before each node goes away so a degenerate tree
        // does not recurse once per level.
        let mut pending: Vec<Box<ClueEntry>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Extend<&'a str> for ClueSet {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for text in iter {
            self.insert(text);
        }
    }
}

impl<'a> FromIterator<&'a str> for ClueSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// In-order iterator over a [`ClueSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a ClueEntry>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(node.text.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_yields_nothing() {
        let set = ClueSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn ignores_empty_text() {
        let mut set = ClueSet::new();
        assert!(!set.insert(""));
        assert!(set.is_empty());
    }

    #[test]
    fn duplicates_are_suppressed() {
        let mut set = ClueSet::new();
        assert!(set.insert("Um colar quebrado"));
        assert!(set.insert("Faca com marcas de sangue"));
        assert!(!set.insert("Um colar quebrado"));
        assert!(!set.insert("Faca com marcas de sangue"));
        assert!(set.insert("Mapa antigo da mansão"));

        let clues: Vec<_> = set.iter().collect();
        assert_eq!(
            clues,
            vec![
                "Faca com marcas de sangue",
                "Mapa antigo da mansão",
                "Um colar quebrado",
            ]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn comparison_is_case_sensitive_and_untrimmed() {
        let set: ClueSet = ["luva", "Luva", "luva ", "luva"].into_iter().collect();
        let clues: Vec<_> = set.iter().collect();
        assert_eq!(clues, vec!["Luva", "luva", "luva "]);
    }

    #[test]
    fn in_order_is_strictly_ascending_for_any_insertion_order() {
        let words = [
            "delta", "alpha", "echo", "charlie", "bravo", "foxtrot", "alpha", "golf", "echo",
        ];
        // rotate the input so the tree takes a different shape every time
        for shift in 0..words.len() {
            let mut set = ClueSet::new();
            for word in words.iter().cycle().skip(shift).take(words.len()) {
                set.insert(word);
            }
            let clues: Vec<_> = set.iter().collect();
            assert_eq!(
                clues,
                vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf"]
            );
            assert!(clues.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn iteration_is_restartable() {
        let set: ClueSet = ["b", "a", "c"].into_iter().collect();
        let mut first = set.iter();
        assert_eq!(first.next(), Some("a"));
        assert_eq!(first.len(), 2);

        let again: Vec<_> = (&set).into_iter().collect();
        assert_eq!(again, vec!["a", "b", "c"]);
    }

    #[test]
    fn contains_follows_tree_order() {
        let set: ClueSet = ["m", "c", "x", "a"].into_iter().collect();
        assert!(set.contains("a"));
        assert!(set.contains("x"));
        assert!(!set.contains("b"));
        assert!(!set.contains(""));
    }

    #[test]
    fn deep_degenerate_tree_drops_cleanly() {
        let mut set = ClueSet::new();
        for index in 0..10_000 {
            set.insert(&format!("{index:08}"));
        }
        assert_eq!(set.len(), 10_000);
        drop(set);
    }
}
