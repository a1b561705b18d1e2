//! Prefix-code trie.
//!
//! A [`CodeTree`] maps codes over a fixed [`Alphabet`] to decoded symbols.
//! Inserting a code walks (or creates) one edge per code character and puts
//! a leaf at the end, so the stored codes always form a prefix code.
//!
//! # Overwrite semantics
//!
//! Insertion never fails because of what is already in the tree:
//!
//! - a code ending on an existing leaf replaces that leaf's symbol
//! - a code passing through an existing leaf turns it into a branch and the
//!   old symbol is lost
//! - a code ending on an existing branch replaces the whole subtree
//!
//! # Decoding
//!
//! Decoding walks from the root one character at a time, emitting a symbol
//! and returning to the root whenever a leaf is reached. The walk must end
//! on a leaf boundary.

use crate::error::{Result, TreeError};
use crate::node::{Branch, CodeNode};
use log::trace;
use oxiprefix_core::Alphabet;

/// A code trie over a fixed coding alphabet.
#[derive(Debug, Clone)]
pub struct CodeTree<S> {
    /// Edge labels.
    alphabet: Alphabet,
    /// Root branch; the root never holds a symbol.
    root: Branch<S>,
}

impl<S> CodeTree<S> {
    /// Create an empty tree over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            root: Branch::new(),
        }
    }

    /// The coding alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The root branch.
    pub fn root(&self) -> &Branch<S> {
        &self.root
    }

    /// Number of stored codes (leaves).
    pub fn len(&self) -> usize {
        self.root.leaf_count()
    }

    /// Check whether no code is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Remove every code.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Insert `code` for `symbol`.
    ///
    /// The code is validated before the tree is touched, so a failed insert
    /// leaves the tree unchanged.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyCode`] if `code` is empty
    /// - [`TreeError::InvalidSymbolInCode`] if `code` has a character
    ///   outside the alphabet
    pub fn add_code(&mut self, symbol: S, code: &str) -> Result<()> {
        let path = self.path_of(code)?;
        let Some((&last, prefix)) = path.split_last() else {
            return Err(TreeError::EmptyCode);
        };

        let mut branch = &mut self.root;
        for &index in prefix {
            branch = branch.slot_mut(index).make_branch();
        }

        match branch.insert(last, CodeNode::Leaf(symbol)) {
            Some(CodeNode::Leaf(_)) => trace!("code {code:?} replaced an existing symbol"),
            Some(CodeNode::Internal(old)) if !old.is_empty() => {
                trace!("code {code:?} discarded {} longer codes", old.leaf_count())
            }
            _ => {}
        }

        Ok(())
    }

    /// Decode a concatenation of codes.
    ///
    /// An empty message decodes to an empty sequence. The tree is not
    /// modified.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidSymbolInCode`] if a character is outside the
    ///   alphabet
    /// - [`TreeError::UndecodableMessage`] if a character has no matching
    ///   child, or the message ends in the middle of a code (the position is
    ///   then the message length)
    pub fn decode(&self, message: &str) -> Result<Vec<S>>
    where
        S: Clone,
    {
        let mut output = Vec::new();
        let mut cursor = &self.root;
        let mut mid_code = false;
        let mut consumed = 0;

        for (position, ch) in message.chars().enumerate() {
            let index = self.index_of(ch, position)?;
            match cursor.child(index) {
                None => return Err(TreeError::UndecodableMessage { position }),
                Some(CodeNode::Leaf(symbol)) => {
                    output.push(symbol.clone());
                    cursor = &self.root;
                    mid_code = false;
                }
                Some(CodeNode::Internal(branch)) => {
                    cursor = branch;
                    mid_code = true;
                }
            }
            consumed = position + 1;
        }

        if mid_code {
            return Err(TreeError::UndecodableMessage { position: consumed });
        }

        Ok(output)
    }

    /// Symbol stored at exactly `code`, if that path ends on a leaf.
    pub fn lookup(&self, code: &str) -> Option<&S> {
        let mut chars = code.chars();
        let first = self.alphabet.index_of(chars.next()?)?;
        let mut node = self.root.child(first)?;
        for ch in chars {
            let index = self.alphabet.index_of(ch)?;
            node = node.as_branch()?.child(index)?;
        }
        node.symbol()
    }

    /// Check that every internal node has exactly `|alphabet|` children.
    ///
    /// An empty tree is not complete.
    pub fn is_complete(&self) -> bool {
        self.root.is_complete(self.alphabet.len())
    }

    /// All `(symbol, code)` pairs, depth-first in alphabet order.
    pub fn all_codes(&self) -> Vec<(S, String)>
    where
        S: Clone,
    {
        let mut codes = Vec::new();
        let mut path = String::new();
        collect_codes(&self.alphabet, &self.root, &mut path, &mut codes);
        codes
    }

    /// Check that every character of `text` belongs to the alphabet.
    pub fn check_symbols(&self, text: &str) -> Result<()> {
        for (position, ch) in text.chars().enumerate() {
            self.index_of(ch, position)?;
        }
        Ok(())
    }

    fn index_of(&self, ch: char, position: usize) -> Result<usize> {
        self.alphabet
            .index_of(ch)
            .ok_or(TreeError::InvalidSymbolInCode {
                symbol: ch,
                position,
            })
    }

    fn path_of(&self, code: &str) -> Result<Vec<usize>> {
        if code.is_empty() {
            return Err(TreeError::EmptyCode);
        }
        code.chars()
            .enumerate()
            .map(|(position, ch)| self.index_of(ch, position))
            .collect()
    }
}

/// Depth-first walk; `path` holds the edges from the root to `branch`.
fn collect_codes<S: Clone>(
    alphabet: &Alphabet,
    branch: &Branch<S>,
    path: &mut String,
    codes: &mut Vec<(S, String)>,
) {
    for (index, edge) in alphabet.iter().enumerate() {
        let Some(child) = branch.child(index) else {
            continue;
        };
        path.push(edge);
        match child {
            CodeNode::Leaf(symbol) => codes.push((symbol.clone(), path.clone())),
            CodeNode::Internal(inner) => collect_codes(alphabet, inner, path, codes),
        }
        path.pop();
    }
}
