//! Round setup.
//!
//! A round copies the canonical pool into a fresh deck, sets one random
//! card aside face-down and, at a two-player table only, three more
//! face-up. Player counts outside `1..=4` are rejected before any deck
//! exists.
//!
//! ## Ledger
//!
//! Dropping a `Round` bumps a process-wide counter exactly once, so
//! [`rounds_played`] reports how many rounds have been discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{Card, CardPool};
use crate::core::{GameRng, RoundConfig};
use crate::deck::{Deck, LogicalSequence};
use crate::error::Result;

/// Cards set aside face-up at a two-player table.
pub const TWO_PLAYER_FACE_UP: usize = 3;

static ROUNDS_PLAYED: AtomicU64 = AtomicU64::new(0);

/// Rounds discarded so far in this process.
#[must_use]
pub fn rounds_played() -> u64 {
    ROUNDS_PLAYED.load(Ordering::Relaxed)
}

/// A round that has finished setup.
///
/// Not `Clone`: each value is one round and is counted once on drop.
#[derive(Debug)]
pub struct Round {
    players: u8,
    deck: Deck,
    face_down: SmallVec<[Card; 1]>,
    face_up: SmallVec<[Card; TWO_PLAYER_FACE_UP]>,
    rng: GameRng,
}

impl Round {
    /// Set up a round from configuration.
    ///
    /// Uses the configured seed, or OS entropy when none is given.
    pub fn new(config: RoundConfig) -> Result<Self> {
        let players = config.validated_players()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::deal(players, rng)
    }

    /// Set up a round drawing setup and later draws from `rng`.
    pub fn with_rng(players: i64, rng: GameRng) -> Result<Self> {
        let players = RoundConfig::new(players).validated_players()?;
        Self::deal(players, rng)
    }

    /// Deal the set-aside cards for an already validated table size.
    fn deal(players: u8, mut rng: GameRng) -> Result<Self> {
        let mut deck = CardPool::canonical().to_deck();

        let mut face_down = SmallVec::new();
        face_down.push(deck.remove_random(&mut rng)?);

        let mut face_up = SmallVec::new();
        if players == 2 {
            for _ in 0..TWO_PLAYER_FACE_UP {
                face_up.push(deck.remove_random(&mut rng)?);
            }
        }

        info!(
            players,
            seed = rng.seed(),
            remaining = deck.length(),
            face_up = face_up.len(),
            "round set up"
        );

        Ok(Self {
            players,
            deck,
            face_down,
            face_up,
            rng,
        })
    }

    /// Number of players at the table.
    #[must_use]
    pub fn players(&self) -> u8 {
        self.players
    }

    /// Remaining deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access for gameplay.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Hidden cards set aside at setup.
    #[must_use]
    pub fn face_down(&self) -> &[Card] {
        &self.face_down
    }

    /// Visible cards set aside at setup (two players only).
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// Draw a random card from the deck.
    pub fn draw(&mut self) -> Result<Card> {
        let card = self.deck.remove_random(&mut self.rng)?;
        debug!(card = %card.name, remaining = self.deck.length(), "card drawn");
        Ok(card)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RabuRetta round for {} players.", self.players)?;
        if !self.face_up.is_empty() {
            let names: Vec<_> = self.face_up.iter().map(|c| c.name.as_str()).collect();
            write!(f, "\nFaceup cards:\n\t{}", names.join(", "))?;
        }
        if !self.face_down.is_empty() {
            write!(f, "\nNumber of facedown cards: {}", self.face_down.len())?;
        }
        Ok(())
    }
}

impl Drop for Round {
    fn drop(&mut self) {
        let played = ROUNDS_PLAYED.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(rounds_played = played, "round finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_setup() {
        let round = Round::with_rng(2, GameRng::new(1)).unwrap();
        assert_eq!(round.players(), 2);
        assert_eq!(round.face_down().len(), 1);
        assert_eq!(round.face_up().len(), 3);
        assert_eq!(round.deck().length(), 12);
    }

    #[test]
    fn test_larger_tables_skip_face_up() {
        for players in [1, 3, 4] {
            let round = Round::with_rng(players, GameRng::new(7)).unwrap();
            assert_eq!(round.face_down().len(), 1);
            assert!(round.face_up().is_empty());
            assert_eq!(round.deck().length(), 15);
        }
    }

    #[test]
    fn test_invalid_players() {
        for players in [-1, 0, 5] {
            let err = Round::with_rng(players, GameRng::new(0)).unwrap_err();
            assert!(err.is_invalid_configuration());
        }
    }

    #[test]
    fn test_seeded_rounds_repeat() {
        let a = Round::new(RoundConfig::new(2).with_seed(99)).unwrap();
        let b = Round::new(RoundConfig::new(2).with_seed(99)).unwrap();
        assert_eq!(a.face_down(), b.face_down());
        assert_eq!(a.face_up(), b.face_up());
        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn test_config_and_rng_entry_points_agree() {
        for players in 1..=4 {
            let a = Round::new(RoundConfig::new(players).with_seed(17)).unwrap();
            let b = Round::with_rng(players, GameRng::new(17)).unwrap();
            assert_eq!(a.face_down(), b.face_down());
            assert_eq!(a.face_up(), b.face_up());
            assert_eq!(a.deck(), b.deck());
        }
        assert!(Round::new(RoundConfig::new(9)).unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn test_set_aside_cards_are_single_copies() {
        let round = Round::with_rng(2, GameRng::new(3)).unwrap();
        for card in round.face_down().iter().chain(round.face_up()) {
            assert_eq!(card.count, 1);
        }
    }

    #[test]
    fn test_draw() {
        let mut round = Round::with_rng(4, GameRng::new(5)).unwrap();
        let card = round.draw().unwrap();
        assert_eq!(card.count, 1);
        assert_eq!(round.deck().length(), 14);
    }

    #[test]
    fn test_display() {
        let round = Round::with_rng(3, GameRng::new(5)).unwrap();
        assert_eq!(
            round.to_string(),
            "RabuRetta round for 3 players.\nNumber of facedown cards: 1"
        );

        let round = Round::with_rng(2, GameRng::new(5)).unwrap();
        let text = round.to_string();
        assert!(text.starts_with("RabuRetta round for 2 players.\nFaceup cards:\n\t"));
        assert!(text.ends_with("Number of facedown cards: 1"));
    }

    #[test]
    fn test_drop_counts_round() {
        let before = rounds_played();
        drop(Round::with_rng(4, GameRng::new(11)).unwrap());
        assert!(rounds_played() >= before + 1);
    }
}
