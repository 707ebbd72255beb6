//! Board service
//!
//! Owns the board state and handles board intents.

use tracing::debug;

use crate::application::{BoardIntent, Outcome};
use crate::domain::{Board, Card, CardId, ColumnId};

/// Explicit state holder for the kanban widget.
#[derive(Debug, Clone, Default)]
pub struct BoardService {
    board: Board,
}

impl BoardService {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn add_card(&mut self, column: &ColumnId, title: &str) -> Outcome<CardId> {
        Outcome::from_result("add card", self.board.add_card(column, title))
    }

    pub fn delete_card(&mut self, id: &CardId) -> Outcome<Card> {
        Outcome::from_result("delete card", self.board.delete_card(id))
    }

    pub fn rename_card(&mut self, id: &CardId, title: &str) -> Outcome {
        Outcome::from_result("rename card", self.board.rename_card(id, title))
    }

    pub fn move_card(&mut self, id: &CardId, to: &ColumnId, index: Option<usize>) -> Outcome {
        Outcome::from_result("move card", self.board.move_card(id, to, index))
    }

    pub fn apply(&mut self, intent: BoardIntent) -> Outcome {
        debug!("apply: {}", intent);
        match intent {
            BoardIntent::Add { column, title } => self.add_card(&column, &title).map(|_| ()),
            BoardIntent::Rename { id, title } => self.rename_card(&id, &title),
            BoardIntent::Delete { id } => self.delete_card(&id).map(|_| ()),
            BoardIntent::Move { id, to, index } => self.move_card(&id, &to, index),
        }
    }
}
