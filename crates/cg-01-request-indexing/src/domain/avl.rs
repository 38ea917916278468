//! Height-balanced (AVL) binary search tree.
//!
//! Same insert-or-overwrite contract as [`super::bst::OrderedKeyTree`],
//! plus the strict height-balance invariant: after every insertion,
//! |height(left) − height(right)| ≤ 1 at every node, restored by single
//! or double rotations on the way back up the insertion path. The
//! rotation case (LL/RR vs. LR/RL) is decided by comparing the key just
//! inserted against the taller child's key.

use std::borrow::Borrow;
use std::cmp::Ordering;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    height: i32,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

/// Height-balanced ordered map. Lookup and insert are O(log n) at all
/// times.
#[derive(Debug)]
pub struct BalancedHeightTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord + Clone, V> BalancedHeightTree<K, V> {
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

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> i32 {
        Self::link_height(&self.root)
    }

    /// Inserts a key/value pair, replacing the value if the key exists,
    /// then restores the balance invariant.
    pub fn insert(&mut self, key: K, value: V) {
        let root = self.root.take();
        let (root, grew) = Self::insert_node(root, key, value);
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

    fn link_height(link: &Link<K, V>) -> i32 {
        link.as_ref().map_or(0, |n| n.height)
    }

    fn update(node: &mut Node<K, V>) {
        node.height = 1 + Self::link_height(&node.left).max(Self::link_height(&node.right));
    }

    fn balance_factor(node: &Node<K, V>) -> i32 {
        Self::link_height(&node.left) - Self::link_height(&node.right)
    }

    fn rotate_right(mut y: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = y.left.take().expect("rotate_right requires a left child");
        y.left = x.right.take();
        Self::update(&mut y);
        x.right = Some(y);
        Self::update(&mut x);
        x
    }

    fn rotate_left(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut y = x.right.take().expect("rotate_left requires a right child");
        x.right = y.left.take();
        Self::update(&mut x);
        y.left = Some(x);
        Self::update(&mut y);
        y
    }

    // Returns the (possibly new) subtree root and whether a node was created.
    fn insert_node(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, bool) {
        let Some(mut node) = link else {
            return (Box::new(Node::new(key, value)), true);
        };

        // The inserted key disambiguates the LR/RL rotation cases below.
        let probe = key.clone();
        let grew = match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, grew) = Self::insert_node(node.left.take(), key, value);
                node.left = Some(child);
                grew
            }
            Ordering::Greater => {
                let (child, grew) = Self::insert_node(node.right.take(), key, value);
                node.right = Some(child);
                grew
            }
            Ordering::Equal => {
                node.value = value;
                return (node, false);
            }
        };

        Self::update(&mut node);
        (Self::rebalance(node, &probe), grew)
    }

    fn rebalance(mut node: Box<Node<K, V>>, inserted: &K) -> Box<Node<K, V>> {
        let balance = Self::balance_factor(&node);

        if balance > 1 {
            let left_key_cmp = node
                .left
                .as_deref()
                .map(|l| inserted.cmp(&l.key))
                .unwrap_or(Ordering::Equal);
            // LL
            if left_key_cmp == Ordering::Less {
                return Self::rotate_right(node);
            }
            // LR
            if left_key_cmp == Ordering::Greater {
                let left = node.left.take().expect("left-heavy node has a left child");
                node.left = Some(Self::rotate_left(left));
                return Self::rotate_right(node);
            }
        }

        if balance < -1 {
            let right_key_cmp = node
                .right
                .as_deref()
                .map(|r| inserted.cmp(&r.key))
                .unwrap_or(Ordering::Equal);
            // RR
            if right_key_cmp == Ordering::Greater {
                return Self::rotate_left(node);
            }
            // RL
            if right_key_cmp == Ordering::Less {
                let right = node
                    .right
                    .take()
                    .expect("right-heavy node has a right child");
                node.right = Some(Self::rotate_right(right));
                return Self::rotate_left(node);
            }
        }

        node
    }
}

impl<K: Ord + Clone, V> Default for BalancedHeightTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
