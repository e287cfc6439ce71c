//! Logical sequence protocol.
//!
//! A `LogicalSequence` exposes an expanded, position-indexed view over
//! storage that may be compressed. Implementors provide `length` and `at`;
//! iteration is derived from them.
//!
//! ## Indexing
//!
//! Indices are signed. Non-negative indices count from the front,
//! negative ones from the back (`-1` is the last element). Anything
//! outside `[-length, length)` is [`Error::OutOfRange`].

use crate::error::{Error, Result};

/// Indexable, finite sequence over logical positions.
pub trait LogicalSequence {
    /// Element produced at each logical position.
    type Item;

    /// Number of logical elements.
    fn length(&self) -> usize;

    /// Element at a logical index (negative counts from the end).
    fn at(&self, index: i64) -> Result<Self::Item>;

    /// True when there are no logical elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Last logical element.
    fn last(&self) -> Result<Self::Item> {
        self.at(-1)
    }

    /// Lazily produce every element in ascending logical order.
    ///
    /// Each element is fetched through `at` when requested. The iterator
    /// borrows the sequence, so it cannot be mutated while iterating;
    /// start a new iteration after mutating to observe the new state.
    fn produce_sequence(&self) -> SequenceIter<'_, Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }
}

/// Resolve a signed logical index against `length`.
///
/// Returns the absolute position, or `OutOfRange` for positions past
/// either end.
pub fn resolve_index(index: i64, length: usize) -> Result<usize> {
    let position = if index >= 0 {
        index
    } else {
        (length as i64).saturating_add(index)
    };

    if position < 0 || position as usize >= length {
        return Err(Error::OutOfRange { index, length });
    }

    Ok(position as usize)
}

/// Iterator returned by [`LogicalSequence::produce_sequence`].
#[derive(Debug)]
pub struct SequenceIter<'a, S> {
    seq: &'a S,
    next: usize,
    len: usize,
}

impl<'a, S: LogicalSequence> SequenceIter<'a, S> {
    fn new(seq: &'a S) -> Self {
        Self {
            seq,
            next: 0,
            len: seq.length(),
        }
    }
}

impl<S: LogicalSequence> Iterator for SequenceIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let item = self.seq.at(self.next as i64).ok()?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<S: LogicalSequence> ExactSizeIterator for SequenceIter<'_, S> {}

impl<S: LogicalSequence> std::iter::FusedIterator for SequenceIter<'_, S> {}
