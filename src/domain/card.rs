use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::CardId;

/// A unit of work. Owned by exactly one column via that column's id sequence;
/// the card itself does not know which column holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Card {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Partial update merged into an existing card by `BoardStore::update_card`.
///
/// `description` is doubly optional: `None` leaves it alone, `Some(None)`
/// clears it, `Some(Some(text))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
}

impl CardUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    pub fn description(description: Option<String>) -> Self {
        Self {
            title: None,
            description: Some(description),
        }
    }
}
