//! Parse command output module for syntax tree inspection
//!
//! Outputs the lowered syntax tree in JSON Lines format, one node per line,
//! so declaration classification can be checked against real sources.

use crate::symbol::SymbolResolver;
use crate::syntax::{NodeKind, SyntaxTree};
use crate::types::NodeId;
use serde::Serialize;
use std::io::{self, Write};

/// Information about a single lowered node
#[derive(Debug, Serialize)]
pub struct NodeInfo<'t> {
    /// Unique node ID within the file
    pub id: u32,
    /// Parent node ID (omitted for root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
    /// Depth in the tree (0 = root)
    pub depth: usize,
    /// Declaration classification
    pub kind: NodeKind,
    /// Grammar node type (e.g., "method_definition")
    pub syntax: &'t str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'t str>,
    pub start_line: u32,
    pub end_line: u32,
}

/// Output handler for parse command
pub struct ParseOutput<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> ParseOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a node to the output in JSONL format
    pub fn write_node(&mut self, node: &NodeInfo<'_>) -> io::Result<()> {
        let json = serde_json::to_string(node)?;
        writeln!(self.writer, "{json}")?;
        self.written += 1;
        Ok(())
    }

    /// Number of nodes written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Stream the tree depth-first, stopping below `max_depth` when given.
pub fn stream_tree<W: Write>(
    tree: &SyntaxTree,
    output: &mut ParseOutput<W>,
    max_depth: Option<usize>,
) -> io::Result<()> {
    let resolver = SymbolResolver::new(tree);
    walk_and_stream(&resolver, tree.root(), 0, output, max_depth)
}

fn walk_and_stream<W: Write>(
    resolver: &SymbolResolver<'_>,
    id: NodeId,
    depth: usize,
    output: &mut ParseOutput<W>,
    max_depth: Option<usize>,
) -> io::Result<()> {
    let tree = resolver.tree();
    let Some(node) = tree.node(id) else {
        return Ok(());
    };
    let range = resolver.line_range(node);

    output.write_node(&NodeInfo {
        id: id.value(),
        parent: node.parent.map(|parent| parent.value()),
        depth,
        kind: node.kind,
        syntax: node.syntax,
        name: node.name.as_deref(),
        start_line: range.start_line,
        end_line: range.end_line,
    })?;

    if max_depth.is_some_and(|max| depth >= max) {
        return Ok(());
    }

    for &child in tree.children(id) {
        walk_and_stream(resolver, child, depth + 1, output, max_depth)?;
    }

    Ok(())
}
