#![allow(dead_code)]

use kanban_board::domain::{CardId, ColumnId};
use kanban_board::store::BoardStore;

pub fn seeded_store() -> BoardStore {
    BoardStore::seeded()
}

pub fn column_id(store: &BoardStore, title: &str) -> ColumnId {
    store
        .board()
        .columns
        .iter()
        .find(|c| c.title == title)
        .unwrap_or_else(|| panic!("no column titled `{title}`"))
        .id
}

pub fn card_ids(store: &BoardStore, column_title: &str) -> Vec<CardId> {
    let board = store.board();
    board
        .columns
        .iter()
        .find(|c| c.title == column_title)
        .unwrap_or_else(|| panic!("no column titled `{column_title}`"))
        .card_ids
        .clone()
}

pub fn card_titles(store: &BoardStore, column_title: &str) -> Vec<String> {
    let board = store.board();
    card_ids(store, column_title)
        .iter()
        .map(|id| board.cards[id].title.clone())
        .collect()
}

pub fn total_cards(store: &BoardStore) -> usize {
    store.board().card_count()
}
