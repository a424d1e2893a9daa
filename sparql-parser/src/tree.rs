//! The public, read-only view of a successful parse.

use std::fmt;

use crate::arena::{Arena, NodeId, NodeRule};
use crate::grammar::{NamedRule, TerminalTag};

/// What kind of grammar element a [`Node`] matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Rule(NamedRule),
    Terminal(TerminalTag),
    Literal(&'static str),
}

impl From<NodeRule> for Kind {
    fn from(r: NodeRule) -> Self {
        match r {
            NodeRule::Named(n) => Kind::Rule(n),
            NodeRule::Terminal(t) => Kind::Terminal(t),
            NodeRule::Literal(l) => Kind::Literal(l),
        }
    }
}

/// A complete, immutable parse tree over a single input string.
///
/// Unlike `apollo-parser`'s `rowan`-backed tree, this is a plain arena: the
/// grammar here needs mutation (speculative commits, truncation on
/// backtrack) during parsing, so there is no benefit to an immutable,
/// structurally-shared representation once parsing finishes. `Tree` simply
/// freezes the arena the driver built.
pub struct Tree {
    pub(crate) input: String,
    pub(crate) arena: Arena,
}

impl Tree {
    /// The root node, present for every non-empty successful parse.
    pub fn root(&self) -> Node<'_> {
        let id = self.arena.root().expect("a successful parse always has a root node");
        Node { tree: self, id }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn go(node: Node<'_>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(
                f,
                "{:indent$}{:?} {:?}",
                "",
                node.kind(),
                node.text(),
                indent = depth * 2
            )?;
            for child in node.children() {
                go(child, depth + 1, f)?;
            }
            Ok(())
        }
        go(self.root(), 0, f)
    }
}

/// A borrowed handle to one node in a [`Tree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> Kind {
        self.tree.arena.node_rule(self.id).into()
    }

    /// Byte range in [`Tree::input`] this node spans.
    pub fn extents(&self) -> (usize, usize) {
        self.tree.arena.node_extents(self.id)
    }

    pub fn text(&self) -> &'a str {
        let (start, end) = self.extents();
        &self.tree.input[start..end]
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let tree = self.tree;
        tree.arena
            .get(self.id)
            .children
            .clone()
            .into_iter()
            .map(move |id| Node { tree, id })
    }

    /// First leaf (terminal or literal with no children) in this subtree, if
    /// any — a convenience wrapper over [`Self::find_first`] for consumers
    /// that only care about tokens, not structure.
    pub fn first_leaf(&self) -> Option<Node<'a>> {
        self.find_first(true)
            .filter(|n| is_descendant(&self.tree.arena, self.id, n.id))
    }

    /// Pre-order walk into this node: its first child, or (with
    /// `leaves_only`) the first descendant with no children of its own.
    /// Mirrors `tracker_sparql_parser_tree_find_first`.
    pub fn find_first(&self, leaves_only: bool) -> Option<Node<'a>> {
        self.tree
            .arena
            .find_first(self.id, leaves_only)
            .map(|id| Node { tree: self.tree, id })
    }

    /// Continues a pre-order walk from this node: the next sibling, or the
    /// next sibling of the nearest ancestor that has one, `None` once the
    /// walk exhausts the tree. Mirrors `tracker_sparql_parser_tree_find_next`.
    pub fn find_next(&self, leaves_only: bool) -> Option<Node<'a>> {
        self.tree
            .arena
            .find_next(self.id, leaves_only)
            .map(|id| Node { tree: self.tree, id })
    }
}

fn is_descendant(arena: &Arena, ancestor: NodeId, node: NodeId) -> bool {
    let mut current = node;
    loop {
        if current == ancestor {
            return true;
        }
        match arena.get(current).parent {
            Some(p) => current = p,
            None => return false,
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind(), self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn find_first_and_find_next_walk_every_leaf_in_order() {
        let tree = Parser::new("ASK { ?s ?p ?o }").parse_query().unwrap();

        let mut texts = Vec::new();
        let mut node = tree.root().find_first(true);
        while let Some(n) = node {
            texts.push(n.text().to_string());
            node = n.find_next(true);
        }

        assert!(texts.contains(&"ASK".to_string()));
        assert!(texts.contains(&"?s".to_string()));
        assert!(texts.contains(&"?o".to_string()));
    }
}
