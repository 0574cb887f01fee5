//! Text renderings of a [`Tree`]. Both tree layouts draw the right subtree
//! above its parent and the left subtree below it, so reading the output
//! with your head tilted left shows the tree top-down.

use std::fmt::{self, Display, Write};

use crate::tree::{Node, Tree};

/// Layout knobs for the two tree renderings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per level by [`structure`].
    pub indent: usize,
    /// Spaces added per level by [`graphical`].
    pub spacing: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            spacing: 10,
        }
    }
}

/// Joins keys with single spaces.
///
/// ```
/// use bst_menu::render::traversal_line;
///
/// assert_eq!(traversal_line(&[&1, &3, &4]), "1 3 4");
/// assert_eq!(traversal_line::<i32>(&[]), "");
/// ```
pub fn traversal_line<K: Display>(keys: &[&K]) -> String {
    keys.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders every node on its own line, indented `indent` spaces per level,
/// followed by arrows naming its children (`<--` left, `-->` right).
///
/// ```
/// use bst_menu::{render::structure, tree::Tree};
///
/// let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
/// assert_eq!(
///     structure(&tree, 4),
///     "    8\n5\n  <-- 3\n  --> 8\n    3\n",
/// );
/// ```
pub fn structure<K: Display>(tree: &Tree<K>, indent: usize) -> String {
    Structure { tree, indent }.to_string()
}

/// Renders the tree sideways: each node is preceded by a blank line and
/// pushed `spacing` spaces further right for every level below the root.
///
/// ```
/// use bst_menu::{render::graphical, tree::Tree};
///
/// let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
/// assert_eq!(
///     graphical(&tree, 10),
///     "\n          8\n\n5\n\n          3\n",
/// );
/// ```
pub fn graphical<K: Display>(tree: &Tree<K>, spacing: usize) -> String {
    Graphical { tree, spacing }.to_string()
}

/// Writes the [`structure`] rendering into `out`.
pub fn write_structure<K, W>(out: &mut W, tree: &Tree<K>, indent: usize) -> fmt::Result
where
    K: Display,
    W: Write,
{
    match tree.root() {
        Some(root) => structure_node(out, root, 0, indent),
        None => Ok(()),
    }
}

/// Writes the [`graphical`] rendering into `out`.
pub fn write_graphical<K, W>(out: &mut W, tree: &Tree<K>, spacing: usize) -> fmt::Result
where
    K: Display,
    W: Write,
{
    graphical_link(out, tree.root(), 0, spacing)
}

/// [`Display`] adapter for the arrow-annotated layout.
pub struct Structure<'a, K> {
    /// The tree to draw.
    pub tree: &'a Tree<K>,
    /// Spaces per level.
    pub indent: usize,
}

impl<K: Display> Display for Structure<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_structure(f, self.tree, self.indent)
    }
}

/// [`Display`] adapter for the sideways layout.
pub struct Graphical<'a, K> {
    /// The tree to draw.
    pub tree: &'a Tree<K>,
    /// Spaces per level.
    pub spacing: usize,
}

impl<K: Display> Display for Graphical<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graphical(f, self.tree, self.spacing)
    }
}

fn structure_node<K: Display, W: Write>(
    out: &mut W,
    node: &Node<K>,
    level: usize,
    indent: usize,
) -> fmt::Result {
    let pad = level * indent;
    let arrow_pad = pad + indent / 2;

    if let Some(right) = node.right.as_deref() {
        structure_node(out, right, level + 1, indent)?;
    }

    write!(out, "{:pad$}{}", "", node.key, pad = pad)?;
    if let Some(left) = node.left.as_deref() {
        write!(out, "\n{:pad$}<-- {}", "", left.key, pad = arrow_pad)?;
    }
    if let Some(right) = node.right.as_deref() {
        write!(out, "\n{:pad$}--> {}", "", right.key, pad = arrow_pad)?;
    }
    out.write_char('\n')?;

    if let Some(left) = node.left.as_deref() {
        structure_node(out, left, level + 1, indent)?;
    }
    Ok(())
}

fn graphical_link<K: Display, W: Write>(
    out: &mut W,
    node: Option<&Node<K>>,
    space: usize,
    spacing: usize,
) -> fmt::Result {
    let Some(node) = node else {
        return Ok(());
    };
    let space = space + spacing;

    graphical_link(out, node.right.as_deref(), space, spacing)?;
    write!(out, "\n{:pad$}{}\n", "", node.key, pad = space - spacing)?;
    graphical_link(out, node.left.as_deref(), space, spacing)
}
