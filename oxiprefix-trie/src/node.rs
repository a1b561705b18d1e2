//! Code trie nodes.
//!
//! A node is either a [`CodeNode::Leaf`] carrying one decoded symbol, or a
//! [`CodeNode::Internal`] branch whose children are keyed by alphabet
//! position. Because the two are separate variants, a leaf can never have
//! children, which is exactly the prefix property of the code.

use log::trace;
use std::collections::BTreeMap;

/// A node in a code trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeNode<S> {
    /// Terminal node holding a decoded symbol.
    Leaf(S),
    /// Interior node with up to `|alphabet|` children.
    Internal(Branch<S>),
}

/// Children of an interior node, keyed by alphabet position.
///
/// Iteration over children follows alphabet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<S> {
    children: BTreeMap<usize, CodeNode<S>>,
}

impl<S> Default for Branch<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Branch<S> {
    /// Create a branch with no children.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Child at alphabet position `index`.
    pub fn child(&self, index: usize) -> Option<&CodeNode<S>> {
        self.children.get(&index)
    }

    /// Iterate over `(alphabet position, child)` pairs in alphabet order.
    pub fn children(&self) -> impl Iterator<Item = (usize, &CodeNode<S>)> {
        self.children.iter().map(|(&index, node)| (index, node))
    }

    /// Number of occupied child slots.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check whether no child slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check completeness for an alphabet of `arity` characters.
    ///
    /// Every interior node must have exactly `arity` children, recursively.
    pub fn is_complete(&self, arity: usize) -> bool {
        self.children.len() == arity && self.children.values().all(|c| c.is_complete(arity))
    }

    /// Number of leaves below this branch.
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|child| match child {
                CodeNode::Leaf(_) => 1,
                CodeNode::Internal(branch) => branch.leaf_count(),
            })
            .sum()
    }

    /// Slot for `index`, creating an empty interior node if vacant.
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut CodeNode<S> {
        self.children
            .entry(index)
            .or_insert_with(|| CodeNode::Internal(Branch::new()))
    }

    /// Install `node` at `index`, returning whatever was there.
    pub(crate) fn insert(&mut self, index: usize, node: CodeNode<S>) -> Option<CodeNode<S>> {
        self.children.insert(index, node)
    }

    pub(crate) fn clear(&mut self) {
        self.children.clear();
    }
}

impl<S> CodeNode<S> {
    /// Check whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeNode::Leaf(_))
    }

    /// Symbol carried by a leaf.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            CodeNode::Leaf(symbol) => Some(symbol),
            CodeNode::Internal(_) => None,
        }
    }

    /// Children of an interior node.
    pub fn as_branch(&self) -> Option<&Branch<S>> {
        match self {
            CodeNode::Leaf(_) => None,
            CodeNode::Internal(branch) => Some(branch),
        }
    }

    /// A leaf is always complete; a branch must be full at every level.
    pub fn is_complete(&self, arity: usize) -> bool {
        match self {
            CodeNode::Leaf(_) => true,
            CodeNode::Internal(branch) => branch.is_complete(arity),
        }
    }

    /// View this node as a branch, turning a leaf into an empty branch.
    ///
    /// The leaf's symbol is discarded (last write wins).
    pub(crate) fn make_branch(&mut self) -> &mut Branch<S> {
        if self.is_leaf() {
            trace!("code passes through an existing leaf, converting it to a branch");
            *self = CodeNode::Internal(Branch::new());
        }
        match self {
            CodeNode::Internal(branch) => branch,
            CodeNode::Leaf(_) => unreachable!("leaf was replaced by a branch above"),
        }
    }
}
