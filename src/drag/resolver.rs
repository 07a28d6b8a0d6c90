//! Drag gesture resolution.
//!
//! The resolver owns the ephemeral "what is being dragged" state for the
//! single active gesture and translates hover and drop events into board
//! store operations. It never touches board data directly; every mutation
//! goes through the store's public API.

use crate::domain::{CardId, ColumnId};
use crate::store::BoardStore;

/// What a gesture picked up: either a whole column or a card together with
/// the column it started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    Column { column_id: ColumnId },
    Card { card_id: CardId, from_column_id: ColumnId },
}

/// The element under the pointer, resolved to an identity. Anything that is
/// neither a card nor a column is represented by the absence of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Card(CardId),
    Column(ColumnId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { item: DragItem },
}

/// One gesture at a time: a `drag_start` while a gesture is in flight
/// force-resets the previous one rather than queueing.
#[derive(Debug, Default)]
pub struct DragResolver {
    state: DragState,
}

impl DragResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begins a gesture for `item`, abandoning any gesture still in flight.
    pub fn drag_start(&mut self, item: DragItem) {
        if self.is_dragging() {
            tracing::warn!("drag started while another gesture was active, abandoning it");
        }
        self.state = DragState::Dragging { item };
    }

    /// Live hover update. When a card hovers a column other than the one it
    /// currently sits in, it is eagerly moved to the end of that column so
    /// the layout reflows immediately. The tracked origin column follows the
    /// card, which makes repeated hovers (and the eventual drop on the same
    /// column) collapse into no-ops.
    pub fn drag_over(&mut self, store: &mut BoardStore, target: DropTarget) {
        let DragState::Dragging { item } = self.state else {
            return;
        };
        let DragItem::Card { card_id, .. } = item else {
            return;
        };
        let DropTarget::Column(column_id) = target else {
            return;
        };

        let board = store.board();
        let Some(current_column) = board.column_of_card(card_id).map(|c| c.id) else {
            return;
        };
        if current_column == column_id {
            return;
        }
        let Some(destination) = board.column(column_id) else {
            return;
        };

        tracing::debug!(card = %card_id, to = %column_id, "eager move on drag-over");
        store.move_card(card_id, current_column, column_id, destination.card_ids.len());
        self.state = DragState::Dragging {
            item: DragItem::Card {
                card_id,
                from_column_id: column_id,
            },
        };
    }

    /// Ends the gesture and applies the drop, if it resolves to anything.
    ///
    /// Resolution order: no target discards the gesture; a column dropped on
    /// a different column reorders the two; a card dropped on a card lands
    /// immediately before it in that card's column; a card dropped on a
    /// column lands at the end of it. Every path returns to idle.
    pub fn drag_end(&mut self, store: &mut BoardStore, target: Option<DropTarget>) {
        let DragState::Dragging { item } = std::mem::take(&mut self.state) else {
            return;
        };
        let Some(target) = target else {
            tracing::debug!("drop without a target, gesture discarded");
            return;
        };

        match (item, target) {
            (DragItem::Column { column_id }, DropTarget::Column(over_id)) => {
                if column_id != over_id {
                    store.reorder_columns(column_id, over_id);
                }
            }
            (DragItem::Card { card_id, from_column_id }, DropTarget::Card(over_card_id)) => {
                let board = store.board();
                let Some(over_column) = board.column_of_card(over_card_id) else {
                    return;
                };
                let Some(over_index) = over_column
                    .card_ids
                    .iter()
                    .position(|id| *id == over_card_id)
                else {
                    return;
                };
                store.move_card(card_id, from_column_id, over_column.id, over_index);
            }
            (DragItem::Card { card_id, from_column_id }, DropTarget::Column(column_id)) => {
                let board = store.board();
                let Some(destination) = board.column(column_id) else {
                    return;
                };
                store.move_card(
                    card_id,
                    from_column_id,
                    column_id,
                    destination.card_ids.len(),
                );
            }
            // A column dropped on a card resolves to nothing.
            (DragItem::Column { .. }, DropTarget::Card(_)) => {}
        }
    }

    /// Abandons the gesture without invoking any store operation.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag gesture cancelled");
        }
        self.state = DragState::Idle;
    }
}
