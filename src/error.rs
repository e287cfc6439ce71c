//! Error types for deck, round and demo operations.
//!
//! Every fallible operation returns [`Error`] instead of panicking. Index
//! and configuration errors are raised before any state is touched, so a
//! failed call leaves the deck or round exactly as it was.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A logical index does not name a card in the sequence.
    ///
    /// Covers both positions past the end and negative indices reaching
    /// before the start.
    #[error("index {index} out of range for sequence of length {length}")]
    OutOfRange { index: i64, length: usize },

    /// Player count outside the supported `1..=4`.
    #[error("invalid number of players: {players} (expected 1-4)")]
    InvalidConfiguration { players: i64 },

    /// Random removal requested from a deck with no cards left.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// Modular arithmetic across different groups.
    #[error("modular integers belong to different groups: mod {left} and mod {right}")]
    ModulusMismatch { left: u64, right: u64 },

    /// Modulus of zero.
    #[error("modulus must be positive")]
    InvalidModulus,

    /// File or socket I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for [`Error::OutOfRange`].
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// True for [`Error::InvalidConfiguration`].
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange { index: -17, length: 16 };
        assert_eq!(err.to_string(), "index -17 out of range for sequence of length 16");
        assert!(err.is_out_of_range());
        assert!(!err.is_invalid_configuration());
    }

    #[test]
    fn test_invalid_configuration_message() {
        let err = Error::InvalidConfiguration { players: 5 };
        assert_eq!(err.to_string(), "invalid number of players: 5 (expected 1-4)");
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "crew.txt");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
