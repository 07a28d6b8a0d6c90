//! Board document model.
//!
//! A board is an ordered list of columns plus an id-keyed card mapping.
//! Column order is display order (left to right), and each column's
//! `card_ids` sequence is the display order of its cards (top to bottom).
//!
//! Invariants:
//! - every id in any column's `card_ids` has an entry in `cards`, and every
//!   entry in `cards` appears in exactly one column's sequence;
//! - a card id never appears in two columns at once;
//! - column and card ids are unique for the board's lifetime.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::id::{CardId, ColumnId};

/// A named, ordered bucket of card ids. The column owns the ordering of its
/// cards, not the card content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            card_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub cards: HashMap<CardId, Card>,
}

impl Board {
    /// The fixed demo board: three columns with a handful of sample cards.
    /// Every call generates fresh ids.
    pub fn seed() -> Self {
        let mut todo = Column::new("To Do");
        let mut doing = Column::new("In Progress");
        let mut done = Column::new("Done");
        let mut cards = HashMap::new();

        let mut add = |column: &mut Column, title: &str, description: &str| {
            let card = Card::new(title, Some(description.to_string()));
            column.card_ids.push(card.id);
            cards.insert(card.id, card);
        };

        add(&mut todo, "Design landing page", "Draft hero and features sections.");
        add(&mut todo, "Collect requirements", "Sync with stakeholders.");
        add(&mut doing, "Build auth", "Email/password with validation.");
        add(&mut done, "Project setup", "Repo scaffolding and UI kit.");

        Self {
            columns: vec![todo, doing, done],
            cards,
        }
    }

    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn column_position(&self, column_id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// The column whose sequence currently contains `card_id`.
    pub fn column_of_card(&self, card_id: CardId) -> Option<&Column> {
        self.columns.iter().find(|c| c.card_ids.contains(&card_id))
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards.get(&card_id)
    }

    /// Total number of cards across all columns.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Verifies the membership and uniqueness invariants, returning a
    /// description of the first violation found.
    pub fn check_integrity(&self) -> Result<(), String> {
        let mut column_ids = HashSet::new();
        let mut member_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(format!("duplicate column id: {}", column.id));
            }
            for card_id in &column.card_ids {
                if !member_ids.insert(*card_id) {
                    return Err(format!("card {card_id} owned by more than one column"));
                }
                if !self.cards.contains_key(card_id) {
                    return Err(format!(
                        "column `{}` references missing card {card_id}",
                        column.title
                    ));
                }
            }
        }

        for card_id in self.cards.keys() {
            if !member_ids.contains(card_id) {
                return Err(format!("card {card_id} belongs to no column"));
            }
        }

        Ok(())
    }
}
