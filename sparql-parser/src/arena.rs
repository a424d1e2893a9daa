//! Chunked, grow-only, truncatable parse-tree storage.
//!
//! The driver speculatively commits nodes as it descends into a grammar
//! alternative, then throws them away on backtrack. Reallocating a `Vec<Node>`
//! on every rollback would be wasteful, so nodes are grouped into fixed-size
//! chunks (mirroring `TrackerNodeTree`'s `NODES_PER_CHUNK` in
//! `tracker-sparql-parser.c`) and a rollback only ever drops whole or partial
//! trailing chunks, never touches anything before the truncation point.

use crate::grammar::{NamedRule, TerminalTag};

const NODES_PER_CHUNK: usize = 128;

/// What a single arena node records having matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRule {
    Named(NamedRule),
    Terminal(TerminalTag),
    Literal(&'static str),
}

/// One node in the parse tree: a byte range plus the indices of its children,
/// which always sit after it in allocation order.
#[derive(Debug, Clone)]
pub struct Node {
    pub rule: NodeRule,
    pub start: usize,
    pub end: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// An index into an [`Arena`]. Stable until a [`Arena::truncate_after`] drops
/// it and everything allocated after it.
pub type NodeId = usize;

/// Grow-only, truncatable node storage backing a single parse.
#[derive(Debug, Default)]
pub struct Arena {
    chunks: Vec<Vec<Node>>,
    len: usize,
    root: Option<NodeId>,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            len: 0,
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a new node, linking it under `parent` if given, and returns
    /// its id. The first node ever allocated becomes the tree root.
    pub fn allocate(&mut self, rule: NodeRule, start: usize, end: usize, parent: Option<NodeId>) -> NodeId {
        let id = self.len;
        let (chunk_idx, offset) = (id / NODES_PER_CHUNK, id % NODES_PER_CHUNK);
        if chunk_idx == self.chunks.len() {
            self.chunks.push(Vec::with_capacity(NODES_PER_CHUNK));
        }
        debug_assert_eq!(offset, self.chunks[chunk_idx].len());
        self.chunks[chunk_idx].push(Node {
            rule,
            start,
            end,
            parent,
            children: Vec::new(),
        });
        self.len += 1;
        if let Some(p) = parent {
            self.get_mut(p).children.push(id);
        } else if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.chunks[id / NODES_PER_CHUNK][id % NODES_PER_CHUNK]
    }

    /// Widens a node's span once its full extent (e.g. a composite rule's
    /// matched children) is known. Used by the driver after a [`NamedRule`]
    /// frame finishes matching its children.
    pub fn set_end(&mut self, id: NodeId, end: usize) {
        self.get_mut(id).end = end;
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.chunks[id / NODES_PER_CHUNK][id % NODES_PER_CHUNK]
    }

    /// Drops every node with id `>= len`, plus its entry in any parent's
    /// child list. Used when a grammar alternative fails and the driver
    /// backtracks past nodes it had speculatively committed.
    pub fn truncate_after(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // Clear dangling child references in nodes that survive the cut.
        let mut touched_parents = Vec::new();
        for id in len..self.len {
            if let Some(p) = self.get(id).parent {
                if p < len {
                    touched_parents.push(p);
                }
            }
        }
        for p in touched_parents {
            self.get_mut(p).children.retain(|&c| c < len);
        }

        let full_chunks = len / NODES_PER_CHUNK;
        let remainder = len % NODES_PER_CHUNK;
        self.chunks.truncate(full_chunks + usize::from(remainder > 0));
        if remainder > 0 {
            if let Some(last) = self.chunks.last_mut() {
                last.truncate(remainder);
            }
        }
        self.len = len;
        if self.root.is_some_and(|r| r >= len) {
            self.root = None;
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Pre-order walk starting at `node`: the first child if `leaves_only` is
    /// false, otherwise the first descendant with no children.
    pub fn find_first(&self, node: NodeId, leaves_only: bool) -> Option<NodeId> {
        let n = self.get(node);
        if leaves_only && !n.children.is_empty() {
            return self.find_first(n.children[0], leaves_only);
        }
        n.children.first().copied()
    }

    /// Pre-order walk: the next sibling, or the next sibling of the nearest
    /// ancestor that has one. Returns `None` once the walk exhausts `root`.
    pub fn find_next(&self, node: NodeId, leaves_only: bool) -> Option<NodeId> {
        if !leaves_only {
            if let Some(child) = self.get(node).children.first() {
                return Some(*child);
            }
        }
        let mut current = node;
        loop {
            let n = self.get(current);
            let parent = n.parent?;
            let siblings = &self.get(parent).children;
            let pos = siblings.iter().position(|&c| c == current).expect("node is its parent's child");
            if let Some(&next) = siblings.get(pos + 1) {
                return Some(next);
            }
            current = parent;
        }
    }

    pub fn node_extents(&self, node: NodeId) -> (usize, usize) {
        let n = self.get(node);
        (n.start, n.end)
    }

    pub fn node_rule(&self, node: NodeId) -> NodeRule {
        self.get(node).rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_drops_trailing_nodes_and_parent_links() {
        let mut arena = Arena::new();
        let root = arena.allocate(NodeRule::Named(NamedRule::Query), 0, 10, None);
        let checkpoint = arena.len();
        let child = arena.allocate(NodeRule::Named(NamedRule::Prologue), 0, 0, Some(root));
        assert_eq!(arena.get(root).children, vec![child]);

        arena.truncate_after(checkpoint);
        assert_eq!(arena.len(), checkpoint);
        assert!(arena.get(root).children.is_empty());
    }

    #[test]
    fn truncate_across_chunk_boundary() {
        let mut arena = Arena::new();
        let root = arena.allocate(NodeRule::Named(NamedRule::Query), 0, 0, None);
        for _ in 0..NODES_PER_CHUNK + 5 {
            arena.allocate(NodeRule::Literal("x"), 0, 1, Some(root));
        }
        assert_eq!(arena.chunks.len(), 2);
        arena.truncate_after(1);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.chunks.len(), 1);
        assert!(arena.get(root).children.is_empty());
    }

    #[test]
    fn find_first_and_next_walk_preorder() {
        let mut arena = Arena::new();
        let root = arena.allocate(NodeRule::Named(NamedRule::Query), 0, 10, None);
        let a = arena.allocate(NodeRule::Named(NamedRule::Prologue), 0, 0, Some(root));
        let b = arena.allocate(NodeRule::Literal("SELECT"), 0, 6, Some(root));

        assert_eq!(arena.find_first(root, false), Some(a));
        assert_eq!(arena.find_next(a, false), Some(b));
        assert_eq!(arena.find_next(b, false), None);
    }
}
