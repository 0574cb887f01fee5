//! An owned, unbalanced BST. Every `Node` exclusively owns its children so
//! removing a node (or dropping the tree) frees it and everything below it.
//!
//! Insert and delete first walk down to the `Link` slot that holds (or
//! would hold) the key, then rewrite just that slot. The walk is a loop, so a
//! tree fed sorted keys can grow long without exhausting the stack.
//!
//! # Examples
//!
//! ```
//! use bst_menu::tree::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! assert_eq!(tree.inorder(), [&1, &3, &4, &5, &8]);
//! assert_eq!(tree.preorder(), [&5, &3, &1, &4, &8]);
//! assert_eq!(tree.postorder(), [&1, &4, &3, &8, &5]);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&3), Some(3));
//! assert_eq!(tree.preorder(), [&5, &4, &1, &8]);
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::util::Traversal;

/// An optional, owned subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of unique keys. Inserting a key that is already
/// present leaves the tree untouched.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Unlinks nodes onto a stack so a long chain doesn't drop recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for Tree<K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has a height of 0
    /// and a lone root has a height of 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The smallest key in the tree, if any.
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    ///
    /// let tree: Tree<i32> = [7, 2, 9].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&2));
    /// assert_eq!(Tree::<i32>::new().min(), None);
    /// ```
    pub fn min(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &root.min_value_node().key)
    }

    /// Keys in ascending order: left subtree, node, right subtree.
    pub fn inorder(&self) -> Vec<&K> {
        self.traverse(Traversal::Inorder)
    }

    /// Keys with every node visited before its subtrees.
    pub fn preorder(&self) -> Vec<&K> {
        self.traverse(Traversal::Preorder)
    }

    /// Keys with every node visited after its subtrees.
    pub fn postorder(&self) -> Vec<&K> {
        self.traverse(Traversal::Postorder)
    }

    /// Collects the keys in the given depth-first order.
    pub fn traverse(&self, order: Traversal) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        visit(&self.root, order, &mut keys);
        keys
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Tree<K> {
    /// Inserts `key` into the tree. Returns `false`, leaving the tree as it
    /// was, when the key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Whether a node with the given key is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }
}

impl<K: Ord + Clone> Tree<K> {
    /// Deletes the node holding `key` and returns the key. If the tree does
    /// not contain the key, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_menu::tree::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.inorder(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let removed = delete(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

/// A single key and the two subtrees hanging off it.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The leftmost node of the subtree rooted here.
    pub(crate) fn min_value_node(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }
}

/// Walks down from `link` towards `key` and returns the slot where it
/// lives: a `Some` holding the key, or the empty slot it would be inserted
/// into.
fn find_slot<'a, K: Ord>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K> {
    while let Some(ord) = link.as_deref().map(|node| key.cmp(&node.key)) {
        link = match (ord, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
    link
}

/// Hangs a new leaf for `key` below `root`. Returns `false` if the key was
/// already there.
fn insert<K: Ord>(root: &mut Link<K>, key: K) -> bool {
    let slot = find_slot(root, &key);
    if slot.is_some() {
        return false;
    }
    *slot = Some(Node::new_boxed(key));
    true
}

/// Deletes `key` from below `root` and returns it, if it was there.
fn delete<K: Ord + Clone>(root: &mut Link<K>, key: &K) -> Option<K> {
    let slot = find_slot(root, key);
    let node = slot.as_mut()?;

    if node.left.is_some() && node.right.is_some() {
        // The successor has no left child, so deleting it from the right
        // subtree always splices it out below.
        let successor = node.right.as_deref()?.min_value_node().key.clone();
        let successor = delete(&mut node.right, &successor)?;
        return Some(mem::replace(&mut node.key, successor));
    }

    let mut node = slot.take()?;
    *slot = node.left.take().or_else(|| node.right.take());
    Some(node.key)
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_deref()
        .map_or(0, |node| height(&node.left).max(height(&node.right)) + 1)
}

fn visit<'a, K>(link: &'a Link<K>, order: Traversal, keys: &mut Vec<&'a K>) {
    let Some(node) = link.as_deref() else {
        return;
    };

    match order {
        Traversal::Inorder => {
            visit(&node.left, order, keys);
            keys.push(&node.key);
            visit(&node.right, order, keys);
        }
        Traversal::Preorder => {
            keys.push(&node.key);
            visit(&node.left, order, keys);
            visit(&node.right, order, keys);
        }
        Traversal::Postorder => {
            visit(&node.left, order, keys);
            visit(&node.right, order, keys);
            keys.push(&node.key);
        }
    }
}
