//! Lowering of JavaScript/TypeScript tree-sitter trees.
//!
//! Both grammars share node type names for every construct classified here,
//! so one lowering serves `.js`, `.ts` and `.tsx` sources.

use crate::syntax::{NodeKind, SyntaxTree};
use crate::types::NodeId;
use tree_sitter::Node;

/// Node types whose identifier becomes a symbol path segment.
const NAMED_NODES: &[&str] = &[
    "class_declaration",
    "abstract_class_declaration",
    "class",
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "function_signature",
    "method_definition",
    "method_signature",
    "abstract_method_signature",
    "variable_declarator",
    "pair",
    "field_definition",
    "public_field_definition",
    "internal_module",
    "module",
    "interface_declaration",
    "enum_declaration",
    "type_alias_declaration",
];

/// Lower the named nodes of a tree-sitter tree into a [`SyntaxTree`].
pub fn lower(root: Node<'_>, code: &str) -> SyntaxTree {
    let mut tree = SyntaxTree::new(code);
    let parent = tree.root();
    lower_children(&mut tree, parent, root, code);
    tree
}

fn lower_children(tree: &mut SyntaxTree, parent: NodeId, node: Node<'_>, code: &str) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let id = tree.add_node(
            parent,
            classify(child, code),
            child.kind(),
            name_of(child, code),
            decorated_start(child)..child.end_byte(),
        );
        lower_children(tree, id, child, code);
    }
}

/// Start byte of a node including the decorators written before it.
///
/// Decorators of an exported class belong to the `export_statement`, and
/// decorators of a class member are siblings inside the `class_body`.
pub fn decorated_start(node: Node<'_>) -> usize {
    let start = node.start_byte();
    match node.parent() {
        Some(parent) if parent.kind() == "export_statement" => {
            let mut cursor = parent.walk();
            let first = parent
                .children_by_field_name("decorator", &mut cursor)
                .map(|decorator| decorator.start_byte())
                .filter(|&decorator| decorator < start)
                .min();
            first.unwrap_or(start)
        }
        Some(parent) if parent.kind() == "class_body" => {
            let mut start = start;
            let mut sibling = node.prev_named_sibling();
            while let Some(prev) = sibling {
                match prev.kind() {
                    "decorator" => start = prev.start_byte(),
                    "comment" => {}
                    _ => break,
                }
                sibling = prev.prev_named_sibling();
            }
            start
        }
        _ => start,
    }
}

/// Classify a tree-sitter node as one of the declaration kinds.
pub fn classify(node: Node<'_>, code: &str) -> NodeKind {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => NodeKind::ClassDeclaration,
        // `export default class { ... }`
        "class" if is_default_export(node) => NodeKind::ClassDeclaration,
        "function_declaration" | "generator_function_declaration" | "function_signature" => {
            NodeKind::FunctionDeclaration
        }
        // `export default function () { ... }`
        "function_expression" | "function" | "generator_function" if is_default_export(node) => {
            NodeKind::FunctionDeclaration
        }
        "method_definition" if !is_accessor(node) => method_kind(node, code),
        "abstract_method_signature" => method_kind(node, code),
        "method_signature" if parent_kind(node) == Some("class_body") => method_kind(node, code),
        _ => NodeKind::Other,
    }
}

fn method_kind(node: Node<'_>, code: &str) -> NodeKind {
    let is_constructor = parent_kind(node) == Some("class_body")
        && node
            .child_by_field_name("name")
            .and_then(|name| name.utf8_text(code.as_bytes()).ok())
            == Some("constructor");

    if is_constructor {
        NodeKind::ConstructorDeclaration
    } else {
        NodeKind::MethodDeclaration
    }
}

/// Identifier text of a declaration-like node, verbatim.
pub fn name_of(node: Node<'_>, code: &str) -> Option<String> {
    let kind = node.kind();
    if !NAMED_NODES.contains(&kind) {
        return None;
    }

    let field = match kind {
        "pair" => "key",
        "field_definition" => "property",
        _ => "name",
    };

    let name_node = node.child_by_field_name(field).or_else(|| {
        let mut cursor = node.walk();
        let identifier = node
            .named_children(&mut cursor)
            .find(|child| matches!(child.kind(), "identifier" | "type_identifier"));
        identifier
    })?;

    name_node
        .utf8_text(code.as_bytes())
        .ok()
        .map(str::to_string)
}

/// `get`/`set` accessors are not methods.
fn is_accessor(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let accessor = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && matches!(child.kind(), "get" | "set"));
    accessor
}

fn is_default_export(node: Node<'_>) -> bool {
    parent_kind(node) == Some("export_statement")
}

fn parent_kind(node: Node<'_>) -> Option<&'static str> {
    node.parent().map(|parent| parent.kind())
}
