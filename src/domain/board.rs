//! Kanban board state: a fixed column set and a flat, ordered card list.
//!
//! A column's cards are the global list filtered by `column_id`, so ordering
//! within a column is the global order restricted to that column.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::entities::{normalize_name, Card, CardId, Column, ColumnId};
use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    cards: Vec<Card>,
}

impl Board {
    /// Empty board. Column ids must be non-blank and unique.
    pub fn new(columns: Vec<Column>) -> DomainResult<Self> {
        if columns.iter().any(|c| c.id.as_str().trim().is_empty()) {
            return Err(DomainError::EmptyColumnId);
        }
        if let Some(dup) = columns.iter().map(|c| &c.id).duplicates().next() {
            return Err(DomainError::DuplicateColumn(dup.clone()));
        }
        Ok(Self {
            columns,
            cards: Vec::new(),
        })
    }

    /// Board with existing cards. Cards pointing at unknown columns are rejected.
    pub fn with_cards(columns: Vec<Column>, cards: Vec<Card>) -> DomainResult<Self> {
        let board = Self::new(columns)?;
        if let Some(card) = cards.iter().find(|c| !board.has_column(&c.column_id)) {
            return Err(DomainError::ColumnNotFound(card.column_id.clone()));
        }
        Ok(Self { cards, ..board })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.columns.iter().any(|c| &c.id == id)
    }

    fn ensure_column(&self, id: &ColumnId) -> DomainResult<()> {
        if self.has_column(id) {
            Ok(())
        } else {
            Err(DomainError::ColumnNotFound(id.clone()))
        }
    }

    fn position(&self, id: &CardId) -> DomainResult<usize> {
        self.cards
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DomainError::CardNotFound(id.clone()))
    }

    /// Cards of one column in global list order.
    pub fn cards_in(&self, column: &ColumnId) -> Vec<&Card> {
        self.cards.iter().filter(|c| &c.column_id == column).collect()
    }

    /// Card count per column, in column order. Empty columns report 0.
    pub fn column_counts(&self) -> Vec<(&Column, usize)> {
        let counts = self.cards.iter().map(|c| &c.column_id).counts();
        self.columns
            .iter()
            .map(|col| (col, counts.get(&col.id).copied().unwrap_or(0)))
            .collect()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_card(&mut self, column: &ColumnId, title: &str) -> DomainResult<CardId> {
        let title = normalize_name(title).ok_or(DomainError::EmptyName)?;
        self.ensure_column(column)?;
        let id = CardId::generate();
        self.cards.push(Card {
            id: id.clone(),
            title,
            column_id: column.clone(),
        });
        debug!("added card {} to {}", id, column);
        Ok(id)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete_card(&mut self, id: &CardId) -> DomainResult<Card> {
        let pos = self.position(id)?;
        Ok(self.cards.remove(pos))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn rename_card(&mut self, id: &CardId, title: &str) -> DomainResult<()> {
        let title = normalize_name(title).ok_or(DomainError::EmptyName)?;
        let pos = self.position(id)?;
        self.cards[pos].title = title;
        Ok(())
    }

    /// Reassign a card to `to`.
    ///
    /// Without `to_index` only the column tag changes. With it, the card is
    /// placed at that position among the destination column's cards, clamped
    /// to the end of the column.
    #[instrument(level = "debug", skip(self))]
    pub fn move_card(
        &mut self,
        id: &CardId,
        to: &ColumnId,
        to_index: Option<usize>,
    ) -> DomainResult<()> {
        let pos = self.position(id)?;
        self.ensure_column(to)?;

        let Some(index) = to_index else {
            self.cards[pos].column_id = to.clone();
            return Ok(());
        };

        let mut card = self.cards.remove(pos);
        card.column_id = to.clone();
        let slots: Vec<usize> = self
            .cards
            .iter()
            .positions(|c| &c.column_id == to)
            .collect();
        let insert_at = match slots.get(index) {
            Some(&slot) => slot,
            None => slots.last().map_or(self.cards.len(), |&last| last + 1),
        };
        self.cards.insert(insert_at, card);
        Ok(())
    }
}
