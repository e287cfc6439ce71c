//! Run-length encoded deck.
//!
//! The deck stores one [`Card`] record per card kind, with `count`
//! copies, but behaves like the fully expanded list of cards: indexing,
//! removal and iteration all work in logical positions.
//!
//! ## Invariants
//!
//! - Records keep the order they were built in.
//! - No record ever has `count == 0`; the last copy removes the record.
//! - Logical index `i` belongs to the first record whose cumulative range
//!   `[before, before + count)` contains `i`.
//!
//! ## Removal convention
//!
//! `remove_at` always returns a snapshot of the single copy it removed:
//! the record's name and value with `count == 1`, whether the record was
//! dropped or only decremented. Inspect [`Deck::records`] for what remains.

use im::Vector;

use super::sequence::{resolve_index, LogicalSequence};
use crate::cards::Card;
use crate::core::GameRng;
use crate::error::{Error, Result};

/// Ordered run-length sequence of cards.
///
/// ## Example
///
/// ```
/// use rabu_retta::cards::CardPool;
/// use rabu_retta::deck::LogicalSequence;
///
/// let mut deck = CardPool::canonical().to_deck();
/// assert_eq!(deck.length(), 16);
///
/// // The last five logical cards are the Guards
/// assert_eq!(deck.at(-1).unwrap().name, "Guard");
///
/// let removed = deck.remove_at(-1).unwrap();
/// assert_eq!(removed.count, 1);
/// assert_eq!(deck.length(), 15);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    records: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from records, dropping any with a zero count.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            records: cards.into_iter().filter(|c| c.count > 0).collect(),
        }
    }

    pub(crate) fn from_records(records: Vector<Card>) -> Self {
        if records.iter().any(|c| c.count == 0) {
            return Self::from_cards(records);
        }
        Self { records }
    }

    /// Compressed view: one record per remaining card kind.
    pub fn records(&self) -> impl Iterator<Item = &Card> {
        self.records.iter()
    }

    /// Number of distinct records.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.records.len()
    }

    /// Record index owning absolute logical `position`.
    ///
    /// `position` must already be in range.
    fn locate(&self, position: usize) -> Option<usize> {
        let mut before = 0usize;
        for (i, card) in self.records.iter().enumerate() {
            let count = card.count as usize;
            if position < before + count {
                return Some(i);
            }
            before += count;
        }
        None
    }

    /// Resolve a signed logical index to its owning record.
    fn resolve(&self, index: i64) -> Result<usize> {
        let length = self.length();
        let position = resolve_index(index, length)?;
        self.locate(position)
            .ok_or(Error::OutOfRange { index, length })
    }

    /// Remove one card at a logical index.
    ///
    /// Fails with `OutOfRange` exactly when [`LogicalSequence::at`] does,
    /// and in that case the deck is left untouched.
    pub fn remove_at(&mut self, index: i64) -> Result<Card> {
        let record = self.resolve(index)?;

        if self.records[record].count == 1 {
            return Ok(self.records.remove(record));
        }

        let length = self.length();
        let card = self
            .records
            .get_mut(record)
            .ok_or(Error::OutOfRange { index, length })?;
        card.count -= 1;
        Ok(card.single())
    }

    /// Remove the last logical card.
    pub fn pop(&mut self) -> Result<Card> {
        self.remove_at(-1)
    }

    /// Remove a card at a uniformly random logical position.
    pub fn remove_random(&mut self, rng: &mut GameRng) -> Result<Card> {
        let length = self.length();
        if length == 0 {
            return Err(Error::EmptyDeck);
        }
        let position = rng.gen_index(length);
        self.remove_at(position as i64)
    }
}

impl LogicalSequence for Deck {
    type Item = Card;

    fn length(&self) -> usize {
        self.records.iter().map(|c| c.count as usize).sum()
    }

    fn at(&self, index: i64) -> Result<Card> {
        let record = self.resolve(index)?;
        Ok(self.records[record].clone())
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.records.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardPool;

    fn small_deck() -> Deck {
        Deck::from_cards([
            Card::new("King", 6),
            Card::new("Baron", 3).with_count(2),
            Card::new("Guard", 1).with_count(3),
        ])
    }

    #[test]
    fn test_length_and_distinct() {
        let deck = small_deck();
        assert_eq!(deck.length(), 6);
        assert_eq!(deck.distinct(), 3);
        assert!(Deck::new().is_empty());
    }

    #[test]
    fn test_zero_count_records_dropped() {
        let deck = Deck::from_cards([Card::new("King", 6).with_count(0), Card::new("Guard", 1)]);
        assert_eq!(deck.distinct(), 1);
        assert_eq!(deck.length(), 1);
    }

    #[test]
    fn test_at_maps_cumulative_ranges() {
        let deck = small_deck();
        let names: Vec<_> = (0..6).map(|i| deck.at(i).unwrap().name).collect();
        assert_eq!(names, ["King", "Baron", "Baron", "Guard", "Guard", "Guard"]);
    }

    #[test]
    fn test_at_negative() {
        let deck = small_deck();
        assert_eq!(deck.at(-1).unwrap().name, "Guard");
        assert_eq!(deck.at(-4).unwrap().name, "Baron");
        assert_eq!(deck.at(-6).unwrap().name, "King");
    }

    #[test]
    fn test_at_out_of_range() {
        let deck = small_deck();
        assert!(deck.at(6).unwrap_err().is_out_of_range());
        assert!(deck.at(-7).unwrap_err().is_out_of_range());
        assert!(deck.at(100).is_err());
    }

    #[test]
    fn test_remove_last_copy_drops_record() {
        let mut deck = small_deck();
        let removed = deck.remove_at(0).unwrap();

        assert_eq!(removed, Card::new("King", 6));
        assert_eq!(deck.distinct(), 2);
        assert_eq!(deck.length(), 5);
        assert_eq!(deck.at(0).unwrap().name, "Baron");
    }

    #[test]
    fn test_remove_decrements_record() {
        let mut deck = small_deck();
        let removed = deck.remove_at(-1).unwrap();

        assert_eq!(removed, Card::new("Guard", 1));
        assert_eq!(deck.distinct(), 3);
        assert_eq!(deck.length(), 5);
        assert_eq!(deck.at(-1).unwrap().count, 2);
    }

    #[test]
    fn test_remove_out_of_range_leaves_deck() {
        let mut deck = small_deck();
        let before = deck.clone();

        assert!(deck.remove_at(6).unwrap_err().is_out_of_range());
        assert!(deck.remove_at(-7).unwrap_err().is_out_of_range());
        assert_eq!(deck, before);
    }

    #[test]
    fn test_pop_drains_in_reverse() {
        let mut deck = small_deck();
        let mut names = Vec::new();
        while let Ok(card) = deck.pop() {
            names.push(card.name);
        }
        assert_eq!(names, ["Guard", "Guard", "Guard", "Baron", "Baron", "King"]);
        assert!(deck.is_empty());
        assert_eq!(deck.distinct(), 0);
    }

    #[test]
    fn test_remove_random() {
        let mut deck = CardPool::canonical().to_deck();
        let mut rng = GameRng::new(42);

        for expected in (0..16).rev() {
            deck.remove_random(&mut rng).unwrap();
            assert_eq!(deck.length(), expected);
        }

        assert!(matches!(deck.remove_random(&mut rng), Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_iteration_matches_indexing() {
        let deck = small_deck();
        let last = deck.at(-1).unwrap();
        let all: Vec<_> = deck.produce_sequence().collect();

        assert_eq!(all.len(), deck.length());
        assert_eq!(all.last(), Some(&last));
    }

    #[test]
    fn test_display() {
        let deck = small_deck();
        assert_eq!(deck.to_string(), "[King (1), Baron (2), Guard (3)]");
        assert_eq!(Deck::new().to_string(), "[]");
    }

    #[test]
    fn test_clone_is_independent() {
        let deck = small_deck();
        let mut copy = deck.clone();
        copy.remove_at(-1).unwrap();

        assert_eq!(deck.length(), 6);
        assert_eq!(copy.length(), 5);
    }
}
