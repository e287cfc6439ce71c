//! Run-length encoded sequences with logical indexing.
//!
//! ## Key Types
//!
//! - `LogicalSequence`: Length, signed indexing and lazy iteration
//! - `Deck`: Run-length sequence of `Card` records
//! - `Tally`: Run-length sequence of plain labels

pub mod run_length;
pub mod sequence;
pub mod tally;

pub use run_length::Deck;
pub use sequence::{resolve_index, LogicalSequence, SequenceIter};
pub use tally::Tally;
