//! The board document store.
//!
//! Holds the current board as an immutable `Arc<Board>` snapshot. Every
//! mutation clones the board, edits the clone, and swaps it in wholesale, so
//! readers holding an older `Arc` never observe a half-updated board.
//! Operations are total: a malformed-but-type-valid id is a silent no-op,
//! never an error, and no-ops leave the snapshot pointer untouched.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Board, Card, CardId, CardUpdate, Column, ColumnId};

use super::observer::StoreObserver;

pub struct BoardStore {
    board: Arc<Board>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            observers: Vec::new(),
        }
    }

    /// A store populated with the demo seed board.
    pub fn seeded() -> Self {
        Self::new(Board::seed())
    }

    /// The current snapshot. Cheap to clone and safe to hold across
    /// subsequent mutations.
    pub fn board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Registers an observer notified after each committed mutation.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    fn commit(&mut self, next: Board) {
        self.board = Arc::new(next);
        tracing::debug!(
            columns = self.board.columns.len(),
            cards = self.board.cards.len(),
            "board snapshot committed"
        );
        for observer in &self.observers {
            observer.board_changed(&self.board);
        }
    }

    // ── Column operations ──────────────────────────────────────

    /// Appends a new empty column. Always succeeds.
    pub fn add_column(&mut self, title: impl Into<String>) -> ColumnId {
        let column = Column::new(title);
        let id = column.id;
        let mut next = (*self.board).clone();
        next.columns.push(column);
        self.commit(next);
        id
    }

    /// Replaces the column's title. No-op if the id is unknown.
    pub fn rename_column(&mut self, column_id: ColumnId, title: impl Into<String>) {
        let mut next = (*self.board).clone();
        match next.column_mut(column_id) {
            Some(column) => column.title = title.into(),
            None => return,
        }
        self.commit(next);
    }

    /// Removes the column and every card it owns, atomically. No-op if the
    /// id is unknown.
    pub fn delete_column(&mut self, column_id: ColumnId) {
        let Some(position) = self.board.column_position(column_id) else {
            return;
        };
        let mut next = (*self.board).clone();
        let removed = next.columns.remove(position);
        for card_id in &removed.card_ids {
            next.cards.remove(card_id);
        }
        tracing::debug!(
            column = %column_id,
            cascaded = removed.card_ids.len(),
            "column deleted"
        );
        self.commit(next);
    }

    /// Moves the column at `active_id` to the position occupied by
    /// `over_id`, shifting the columns in between. No-op if either id is
    /// unknown or they are equal.
    pub fn reorder_columns(&mut self, active_id: ColumnId, over_id: ColumnId) {
        let Some(from) = self.board.column_position(active_id) else {
            return;
        };
        let Some(to) = self.board.column_position(over_id) else {
            return;
        };
        if from == to {
            return;
        }
        let mut next = (*self.board).clone();
        let moved = next.columns.remove(from);
        next.columns.insert(to, moved);
        self.commit(next);
    }

    // ── Card operations ────────────────────────────────────────

    /// Creates a card and appends it to the column's sequence. Returns
    /// `None` without mutating if the column is unknown or the title is
    /// blank (callers are expected to pass trimmed, non-empty titles; the
    /// store defends anyway).
    pub fn add_card(
        &mut self,
        column_id: ColumnId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Option<CardId> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        let mut next = (*self.board).clone();
        let card = Card::new(title, description);
        let id = card.id;
        match next.column_mut(column_id) {
            Some(column) => column.card_ids.push(id),
            None => return None,
        }
        next.cards.insert(id, card);
        self.commit(next);
        Some(id)
    }

    /// Merges partial field updates into the card and refreshes its update
    /// timestamp. No-op if the id is unknown.
    pub fn update_card(&mut self, card_id: CardId, updates: CardUpdate) {
        let mut next = (*self.board).clone();
        let Some(card) = next.cards.get_mut(&card_id) else {
            return;
        };
        if let Some(title) = updates.title {
            if !title.trim().is_empty() {
                card.title = title;
            }
        }
        if let Some(description) = updates.description {
            card.description = description;
        }
        card.updated_at = Some(Utc::now());
        self.commit(next);
    }

    /// Removes the card from the column's sequence and the card mapping.
    /// No-op unless the card is a member of that exact column.
    pub fn delete_card(&mut self, column_id: ColumnId, card_id: CardId) {
        let mut next = (*self.board).clone();
        let Some(column) = next.column_mut(column_id) else {
            return;
        };
        let Some(position) = column.card_ids.iter().position(|id| *id == card_id) else {
            return;
        };
        column.card_ids.remove(position);
        next.cards.remove(&card_id);
        self.commit(next);
    }

    /// Moves a card to `to_index` in the destination column.
    ///
    /// Same-column moves remove the id first and reinsert it, so `to_index`
    /// addresses the sequence *after* removal; an index past the end is
    /// clamped. Cross-column moves remove the id from its current column
    /// (tolerating absence) and insert at `to_index` clamped to the
    /// destination's pre-insertion length. Both sequences change in one
    /// snapshot swap and the card mapping is never touched.
    pub fn move_card(
        &mut self,
        card_id: CardId,
        from_column_id: ColumnId,
        to_column_id: ColumnId,
        to_index: usize,
    ) {
        if !self.board.cards.contains_key(&card_id) {
            return;
        }

        if from_column_id == to_column_id {
            let Some(column) = self.board.column(from_column_id) else {
                return;
            };
            let Some(current) = column.card_ids.iter().position(|id| *id == card_id) else {
                return;
            };
            if current == to_index {
                return;
            }
            let mut card_ids = column.card_ids.clone();
            card_ids.remove(current);
            let insert_at = to_index.min(card_ids.len());
            card_ids.insert(insert_at, card_id);
            if card_ids == column.card_ids {
                // Clamping landed the card back where it started.
                return;
            }
            let mut next = (*self.board).clone();
            if let Some(column) = next.column_mut(from_column_id) {
                column.card_ids = card_ids;
            }
            self.commit(next);
            return;
        }

        if self.board.column(from_column_id).is_none() || self.board.column(to_column_id).is_none()
        {
            return;
        }
        let mut next = (*self.board).clone();
        // Pull the id from wherever it currently sits (normally the source
        // column), so a stale source id can never leave a duplicate behind.
        for column in &mut next.columns {
            column.card_ids.retain(|id| *id != card_id);
        }
        if let Some(destination) = next.column_mut(to_column_id) {
            let insert_at = to_index.min(destination.card_ids.len());
            destination.card_ids.insert(insert_at, card_id);
        }
        tracing::debug!(
            card = %card_id,
            from = %from_column_id,
            to = %to_column_id,
            "card moved between columns"
        );
        self.commit(next);
    }

    /// Splices `active_id` out of the column's sequence and reinserts it at
    /// `over_id`'s position. No-op if the column is unknown, either card is
    /// absent from it, or the positions are equal.
    pub fn reorder_card_in_column(
        &mut self,
        column_id: ColumnId,
        active_id: CardId,
        over_id: CardId,
    ) {
        let Some(column) = self.board.column(column_id) else {
            return;
        };
        let Some(from) = column.card_ids.iter().position(|id| *id == active_id) else {
            return;
        };
        let Some(to) = column.card_ids.iter().position(|id| *id == over_id) else {
            return;
        };
        if from == to {
            return;
        }
        let mut card_ids = column.card_ids.clone();
        let moved = card_ids.remove(from);
        card_ids.insert(to, moved);
        let mut next = (*self.board).clone();
        if let Some(column) = next.column_mut(column_id) {
            column.card_ids = card_ids;
        }
        self.commit(next);
    }

    /// Discards all state and replaces the board with a fresh seed.
    pub fn reset(&mut self) {
        tracing::info!("board reset to seed data");
        self.commit(Board::seed());
    }
}
