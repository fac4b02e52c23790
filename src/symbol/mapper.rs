//! Annotate diff lines with the declaration that encloses them.

use super::SymbolResolver;
use crate::diff::DiffCollection;
use crate::syntax::SyntaxTree;
use crate::types::NodeId;

/// Label every diff line with the path of its innermost enclosing declaration.
///
/// Subtrees without any diff line are skipped. Children are labeled before
/// their parent and a line keeps the first label it receives, so the
/// innermost declaration wins. Lines outside every declaration stay
/// unlabeled. Returns the number of lines labeled.
pub fn map_diffs_to_symbols(tree: &SyntaxTree, diffs: &mut DiffCollection) -> usize {
    let resolver = SymbolResolver::new(tree);
    let labeled = map_nodes(&resolver, tree.top_level(), diffs);

    tracing::debug!(
        "[mapper] labeled {labeled} of {} diff lines",
        diffs.len()
    );
    labeled
}

fn map_nodes(resolver: &SymbolResolver<'_>, nodes: &[NodeId], diffs: &mut DiffCollection) -> usize {
    let tree = resolver.tree();
    let mut labeled = 0;

    for &id in nodes {
        let Some(node) = tree.node(id) else {
            continue;
        };
        let range = resolver.line_range(node);

        if !diffs.has_diff_in_range(range.start_line, range.end_line) {
            tracing::trace!("[mapper] skipping {} at {range}", node.syntax);
            continue;
        }

        labeled += map_nodes(resolver, tree.children(id), diffs);

        if !node.kind.is_labelable() {
            continue;
        }

        let path = resolver.symbol_path(id);
        // A nameless declaration with no named ancestor leaves lines unlabeled
        if path.is_empty() {
            continue;
        }

        tracing::trace!("[mapper] labeling {range} as '{path}'");
        labeled += range
            .lines()
            .filter(|&line| diffs.try_to_set_symbol(line, &path))
            .count();
    }

    labeled
}
