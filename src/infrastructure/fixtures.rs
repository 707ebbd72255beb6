//! Seed state shown when the widgets start.

use crate::domain::{Board, Card, Column, DomainResult, Forest, NodeView};

/// Two unloaded projects and a loaded documents folder.
pub fn seed_forest() -> DomainResult<Forest> {
    Forest::from_views(vec![
        NodeView::stub("root1", "Project A"),
        NodeView::stub("root2", "Project B"),
        NodeView::with_children(
            "root3",
            "Documents",
            vec![
                NodeView::stub("doc1", "README.md"),
                NodeView::stub("doc2", "CHANGELOG.md"),
            ],
        ),
    ])
}

pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "Todo"),
        Column::new("in-progress", "In Progress"),
        Column::new("done", "Done"),
    ]
}

pub fn seed_cards() -> Vec<Card> {
    vec![
        Card::new("1", "Design homepage", "todo"),
        Card::new("2", "Setup database", "todo"),
        Card::new("3", "Implement auth", "in-progress"),
        Card::new("4", "Create API endpoints", "in-progress"),
        Card::new("5", "Write tests", "done"),
    ]
}

/// Seed cards on the given columns. Cards whose column is absent are dropped.
pub fn seed_board(columns: Vec<Column>) -> DomainResult<Board> {
    let cards = seed_cards()
        .into_iter()
        .filter(|card| columns.iter().any(|c| c.id == card.column_id))
        .collect();
    Board::with_cards(columns, cards)
}
