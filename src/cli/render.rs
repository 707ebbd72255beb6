//! Terminal rendering of tree and board state

use termtree::Tree;

use crate::domain::{Board, NodeView};

/// Conversion into a printable `termtree` tree.
pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for NodeView {
    fn to_term_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_term_tree()).collect();
        Tree::new(node_label(self)).with_leaves(leaves)
    }
}

/// `name (id)`, with a marker on nodes whose children were never fetched.
pub fn node_label(node: &NodeView) -> String {
    if node.loaded {
        format!("{} ({})", node.name, node.id)
    } else {
        format!("{} ({}) [not loaded]", node.name, node.id)
    }
}

/// One rendered tree per root, in root order.
pub fn render_forest(roots: &[NodeView]) -> String {
    if roots.is_empty() {
        return "(empty)\n".to_string();
    }
    roots.iter().map(|root| root.to_term_tree().to_string()).collect()
}

/// Columns as `Title (count)` headers followed by their cards.
pub fn render_board(board: &Board) -> Vec<(String, Vec<String>)> {
    board
        .column_counts()
        .into_iter()
        .map(|(column, count)| {
            let cards = board
                .cards_in(&column.id)
                .iter()
                .map(|card| format!("{} [{}]", card.title, card.id))
                .collect();
            (format!("{} ({})", column.title, count), cards)
        })
        .collect()
}
