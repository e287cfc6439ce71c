//! The canonical card pool.
//!
//! Every round starts from the same eight card kinds in the same order.
//! The pool itself is never handed out mutably: rounds receive their own
//! copy through [`CardPool::to_deck`].

use im::Vector;

use super::card::Card;
use crate::deck::Deck;

/// Blurb printed by the `info` command.
pub const INFO: &str = "Rabu Retta is a great game!";

/// Fixed, ordered list of card kinds with their starting counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPool {
    records: Vector<Card>,
}

impl CardPool {
    /// The standard 8-kind, 16-card pool.
    #[must_use]
    pub fn canonical() -> Self {
        let records = [
            Card::new("Princess", 8),
            Card::new("Countess", 7),
            Card::new("King", 6),
            Card::new("Prince", 5).with_count(2),
            Card::new("Handmaid", 4).with_count(2),
            Card::new("Baron", 3).with_count(2),
            Card::new("Priest", 2).with_count(2),
            Card::new("Guard", 1).with_count(5),
        ]
        .into_iter()
        .collect();

        Self { records }
    }

    /// Total logical cards in the pool.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.iter().map(|c| c.count as usize).sum()
    }

    /// Number of distinct card kinds.
    #[must_use]
    pub fn kinds(&self) -> usize {
        self.records.len()
    }

    /// Iterate over the pool's records in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.records.iter()
    }

    /// Independent deck built from this pool.
    ///
    /// `im::Vector` shares structure until the first write, after which
    /// the deck and the pool diverge; mutations never flow back.
    #[must_use]
    pub fn to_deck(&self) -> Deck {
        Deck::from_records(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::LogicalSequence;

    #[test]
    fn test_canonical_pool() {
        let pool = CardPool::canonical();
        assert_eq!(pool.kinds(), 8);
        assert_eq!(pool.total(), 16);

        let names: Vec<_> = pool.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Princess", "Countess", "King", "Prince", "Handmaid", "Baron", "Priest", "Guard"]
        );

        // Values descend with pool order
        let values: Vec<_> = pool.iter().map(|c| c.value).collect();
        assert_eq!(values, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_deck_is_independent_of_pool() {
        let pool = CardPool::canonical();
        let mut deck = pool.to_deck();

        while !deck.is_empty() {
            deck.remove_at(0).unwrap();
        }

        assert_eq!(deck.length(), 0);
        assert_eq!(pool, CardPool::canonical());
        assert_eq!(pool.total(), 16);
    }
}
