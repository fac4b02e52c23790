//! Symbol path resolution over a lowered syntax tree.

use crate::error::{ResolveError, ResolveResult};
use crate::syntax::{NodeKind, SyntaxNode, SyntaxTree};
use crate::types::{LineRange, NodeId};

/// Literal contributed by constructors to a symbol path
pub const CONSTRUCTOR_SEGMENT: &str = "constructor";

/// Path separator between enclosing declaration names
pub const PATH_SEPARATOR: &str = ".";

/// Read-only view of a tree answering line and path queries.
#[derive(Debug, Clone, Copy)]
pub struct SymbolResolver<'t> {
    tree: &'t SyntaxTree,
}

impl<'t> SymbolResolver<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    /// Whether the node is a class, function, method or constructor.
    pub fn is_labelable(&self, id: NodeId) -> bool {
        self.tree
            .node(id)
            .is_some_and(|node| node.kind.is_labelable())
    }

    /// 1-based inclusive lines spanned by the node.
    pub fn line_range(&self, node: &SyntaxNode) -> LineRange {
        let lines = self.tree.line_index();
        LineRange::new(
            lines.line_of(node.start_byte) + 1,
            lines.line_of(node.end_byte) + 1,
        )
    }

    /// Whether `line` falls within the node's lines.
    ///
    /// Line 0 is never in range. An absent node, or one from another tree,
    /// is an [`ResolveError::InvalidNode`].
    pub fn is_in_range(&self, id: Option<NodeId>, line: u32) -> ResolveResult<bool> {
        let node = id
            .and_then(|id| self.tree.node(id))
            .ok_or(ResolveError::InvalidNode)?;

        if line < 1 {
            return Ok(false);
        }
        Ok(self.line_range(node).contains(line))
    }

    /// Dotted names of the node and its ancestors, outermost first.
    ///
    /// Constructors always contribute `constructor`; nameless nodes are skipped.
    pub fn symbol_path(&self, id: NodeId) -> String {
        let mut segments: Vec<&str> = self
            .tree
            .ancestors(id)
            .filter_map(|(_, node)| match node.kind {
                NodeKind::ConstructorDeclaration => Some(CONSTRUCTOR_SEGMENT),
                _ => node.name.as_deref(),
            })
            .collect();
        segments.reverse();
        segments.join(PATH_SEPARATOR)
    }

    /// Innermost labelable node containing `line`, if any.
    pub fn find_enclosing(&self, line: u32) -> Option<NodeId> {
        self.find_in(self.tree.top_level(), line)
    }

    fn find_in(&self, nodes: &[NodeId], line: u32) -> Option<NodeId> {
        for &id in nodes {
            // Children never extend past their parent
            if !matches!(self.is_in_range(Some(id), line), Ok(true)) {
                continue;
            }
            if let Some(found) = self.find_in(self.tree.children(id), line) {
                return Some(found);
            }
            if self.is_labelable(id) {
                return Some(id);
            }
        }
        None
    }

    /// Symbol path of the declaration enclosing `line`, empty when none does.
    pub fn resolve_line(&self, line: u32) -> String {
        let path = self
            .find_enclosing(line)
            .map(|id| self.symbol_path(id))
            .unwrap_or_default();

        tracing::debug!("[resolver] line {line} resolved to '{path}'");
        path
    }
}
