/// The depth-first orders a [`Tree`][crate::tree::Tree] can be walked in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Left subtree, then the node, then the right subtree. Yields keys in
    /// ascending order.
    Inorder,
    /// The node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

impl Traversal {
    /// A human readable name for headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inorder => "Inorder",
            Self::Preorder => "Preorder",
            Self::Postorder => "Postorder",
        }
    }
}
