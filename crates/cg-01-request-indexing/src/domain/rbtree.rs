//! Left-leaning red-black binary search tree.
//!
//! Same insert-or-overwrite contract as the other ordered maps. New
//! nodes are inserted red; on the way back up the insertion path each
//! node applies, in order: rotate left when only the right link is red,
//! rotate right when two left links in a row are red, flip colors when
//! both links are red. The root is forced black after every top-level
//! insert. Together these keep every root-to-leaf path free of
//! consecutive red links and equal in black-link count, bounding height
//! at O(log n).

use std::borrow::Borrow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// Left-leaning red-black ordered map. Lookup and insert are O(log n)
/// at all times.
#[derive(Debug)]
pub struct BalancedColorTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> BalancedColorTree<K, V> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a key/value pair, replacing the value if the key exists,
    /// then restores the color invariants.
    pub fn insert(&mut self, key: K, value: V) {
        let root = self.root.take();
        let (mut root, grew) = Self::insert_node(root, key, value);
        root.color = Color::Black;
        self.root = Some(root);
        if grew {
            self.len += 1;
        }
    }

    /// Looks up a key without mutating the tree.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns true if the key is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    fn is_red(link: &Link<K, V>) -> bool {
        link.as_ref().is_some_and(|n| n.color == Color::Red)
    }

    fn rotate_left(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = h.right.take().expect("rotate_left requires a right child");
        h.right = x.left.take();
        x.color = h.color;
        h.color = Color::Red;
        x.left = Some(h);
        x
    }

    fn rotate_right(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = h.left.take().expect("rotate_right requires a left child");
        h.left = x.right.take();
        x.color = h.color;
        h.color = Color::Red;
        x.right = Some(h);
        x
    }

    fn flip_colors(h: &mut Node<K, V>) {
        h.color = Color::Red;
        if let Some(left) = h.left.as_deref_mut() {
            left.color = Color::Black;
        }
        if let Some(right) = h.right.as_deref_mut() {
            right.color = Color::Black;
        }
    }

    // Returns the (possibly new) subtree root and whether a node was created.
    fn insert_node(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, bool) {
        let Some(mut h) = link else {
            return (Box::new(Node::new(key, value)), true);
        };

        let grew = match key.cmp(&h.key) {
            Ordering::Less => {
                let (child, grew) = Self::insert_node(h.left.take(), key, value);
                h.left = Some(child);
                grew
            }
            Ordering::Greater => {
                let (child, grew) = Self::insert_node(h.right.take(), key, value);
                h.right = Some(child);
                grew
            }
            Ordering::Equal => {
                h.value = value;
                false
            }
        };

        // fix-ups
        if Self::is_red(&h.right) && !Self::is_red(&h.left) {
            h = Self::rotate_left(h);
        }
        if Self::is_red(&h.left) && h.left.as_ref().is_some_and(|l| Self::is_red(&l.left)) {
            h = Self::rotate_right(h);
        }
        if Self::is_red(&h.left) && Self::is_red(&h.right) {
            Self::flip_colors(&mut h);
        }

        (h, grew)
    }
}

impl<K: Ord, V> Default for BalancedColorTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walks the tree asserting no red node has a red child and every
    /// root-to-leaf path carries the same number of black links.
    /// Returns the black height of the subtree.
    fn assert_color_invariants<K: Ord, V>(link: &Link<K, V>, parent_red: bool) -> usize {
        let Some(node) = link else {
            return 0;
        };
        let red = node.color == Color::Red;
        assert!(
            !(red && parent_red),
            "two consecutive red links on a path"
        );
        let lh = assert_color_invariants(&node.left, red);
        let rh = assert_color_invariants(&node.right, red);
        assert_eq!(lh, rh, "black height differs between paths");
        lh + usize::from(node.color == Color::Black)
    }

    fn assert_valid<K: Ord, V>(tree: &BalancedColorTree<K, V>) {
        if let Some(root) = tree.root.as_deref() {
            assert_eq!(root.color, Color::Black, "root must be black");
        }
        assert_color_invariants(&tree.root, false);
    }

    #[test]
    fn test_insert_and_get() {
        let mut tree = BalancedColorTree::new();
        tree.insert("Khayelitsha", 1u32);
        tree.insert("Athlone", 2);
        tree.insert("Parow", 3);
        tree.insert("", 4);

        assert_eq!(tree.get("Athlone"), Some(&2));
        assert_eq!(tree.get(""), Some(&4));
        assert_eq!(tree.get("Claremont"), None);
        assert_valid(&tree);
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let mut tree = BalancedColorTree::new();
        tree.insert("Bellville", 1u32);
        tree.insert("Bellville", 2);

        assert_eq!(tree.get("Bellville"), Some(&2));
        assert_eq!(tree.len(), 1);
        assert_valid(&tree);
    }

    #[test]
    fn test_sorted_insertion_keeps_invariants() {
        let mut tree = BalancedColorTree::new();
        for i in 0..512u64 {
            tree.insert(i, i);
            assert_valid(&tree);
        }
        for i in 0..512u64 {
            assert_eq!(tree.get(&i), Some(&i));
        }
    }

    proptest! {
        #[test]
        fn prop_invariants_after_every_insert(keys in proptest::collection::vec(0u64..10_000, 0..256)) {
            let mut tree = BalancedColorTree::new();
            for (i, key) in keys.iter().enumerate() {
                tree.insert(*key, i);
                assert_valid(&tree);
            }
        }

        #[test]
        fn prop_last_write_wins(keys in proptest::collection::vec(0u64..64, 1..128)) {
            let mut tree = BalancedColorTree::new();
            let mut expected = std::collections::HashMap::new();
            for (i, key) in keys.iter().enumerate() {
                tree.insert(*key, i);
                expected.insert(*key, i);
            }
            prop_assert_eq!(tree.len(), expected.len());
            for (key, value) in &expected {
                prop_assert_eq!(tree.get(key), Some(value));
            }
        }
    }
}
