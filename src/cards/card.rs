//! Card records.
//!
//! A `Card` is one run in the deck's run-length encoding: a card kind
//! (name and value) together with how many identical copies remain.

use serde::{Deserialize, Serialize};

/// A card kind and its remaining copy count.
///
/// ## Example
///
/// ```
/// use rabu_retta::cards::Card;
///
/// let guard = Card::new("Guard", 1).with_count(5);
/// assert_eq!(guard.to_string(), "Guard (5)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name (e.g. "Princess").
    pub name: String,

    /// Card strength; higher wins comparisons.
    pub value: u8,

    /// Number of identical copies this record stands for.
    pub count: u32,
}

impl Card {
    /// Create a single-copy card.
    #[must_use]
    pub fn new(name: impl Into<String>, value: u8) -> Self {
        Self {
            name: name.into(),
            value,
            count: 1,
        }
    }

    /// Set the copy count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Snapshot of one copy of this card.
    #[must_use]
    pub fn single(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value,
            count: 1,
        }
    }

    /// Same kind as `other` (name and value), ignoring count.
    #[must_use]
    pub fn same_kind(&self, other: &Card) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}
