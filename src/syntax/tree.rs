//! Arena-backed syntax tree handed from the parser to the resolver.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. The parent
//! link is a plain index, so walking ancestors never needs shared ownership
//! and the tree can be dropped in one piece once a query is answered.

use super::LineIndex;
use crate::types::NodeId;
use serde::Serialize;
use std::ops::Range;

/// Closed classification of node kinds relevant to symbol paths.
///
/// Only the four declaration kinds can anchor a symbol path; every other
/// construct is [`NodeKind::Other`] and may at most contribute its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    ClassDeclaration,
    FunctionDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    Other,
}

impl NodeKind {
    /// Whether a node of this kind is a nameable scope that can label lines.
    pub fn is_labelable(self) -> bool {
        match self {
            NodeKind::ClassDeclaration
            | NodeKind::FunctionDeclaration
            | NodeKind::MethodDeclaration
            | NodeKind::ConstructorDeclaration => true,
            NodeKind::Other => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::ClassDeclaration => "class",
            NodeKind::FunctionDeclaration => "function",
            NodeKind::MethodDeclaration => "method",
            NodeKind::ConstructorDeclaration => "constructor",
            NodeKind::Other => "other",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node of the lowered tree.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Grammar node type the node was lowered from (e.g. `method_definition`)
    pub syntax: &'static str,
    /// Identifier text of the declaration, when the construct has one
    pub name: Option<String>,
    pub start_byte: usize,
    pub end_byte: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Syntax tree of one parsed source file.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    line_index: LineIndex,
}

impl SyntaxTree {
    /// Create a tree holding only a root node that spans the whole source.
    pub fn new(source: &str) -> Self {
        let root = SyntaxNode {
            kind: NodeKind::Other,
            syntax: "program",
            name: None,
            start_byte: 0,
            end_byte: source.len(),
            parent: None,
            children: Vec::new(),
        };

        Self {
            nodes: vec![root],
            line_index: LineIndex::new(source),
        }
    }

    /// Append a node under `parent` and return its id.
    ///
    /// Children keep the order in which they are added.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this tree.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        syntax: &'static str,
        name: Option<String>,
        span: Range<usize>,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes[parent.index()].children.push(id);
        self.nodes.push(SyntaxNode {
            kind,
            syntax,
            name,
            start_byte: span.start,
            end_byte: span.end,
            parent: Some(parent),
            children: Vec::new(),
        });
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    /// Whether the id refers to a node of this tree
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Children of a node in source order; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// The root's direct children, where every traversal starts.
    pub fn top_level(&self) -> &[NodeId] {
        self.children(self.root())
    }

    /// Iterate from `id` up to the root, the node itself first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.contains(id).then_some(id),
        }
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Number of nodes, the root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// All nodes with their ids, in creation (pre-order) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index as u32), node))
    }
}

/// Iterator over a node and its ancestors.
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = (NodeId, &'t SyntaxNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.node(id)?;
        self.next = node.parent;
        Some((id, node))
    }
}
