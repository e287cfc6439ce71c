//! Small numeric helpers: Fibonacci numbers, modular integers and a
//! lazy multiples generator.

mod modular;

pub use modular::ModularInt;

/// The `n`-th Fibonacci number, 1-based: `fibonacci(1) == fibonacci(2) == 1`.
///
/// `fibonacci(0)` is 0. Returns `None` when the value does not fit in a
/// `u64`, which first happens at `n = 94`.
#[must_use]
pub fn fibonacci(n: u32) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 1..n {
        (prev, curr) = (curr, prev.checked_add(curr)?);
    }
    Some(curr)
}

/// Multiples of `step` from 0 up to and including `max`.
///
/// ```
/// use rabu_retta::numbers::Multiples;
///
/// let found: Vec<_> = Multiples::new(3, 10).collect();
/// assert_eq!(found, [0, 3, 6, 9]);
/// ```
#[derive(Clone, Debug)]
pub struct Multiples {
    next: Option<u64>,
    step: u64,
    max: u64,
}

impl Multiples {
    /// A step of 0 yields a single 0.
    #[must_use]
    pub fn new(step: u64, max: u64) -> Self {
        Self {
            next: Some(0),
            step,
            max,
        }
    }
}

impl Iterator for Multiples {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let n = self.next.filter(|&n| n <= self.max)?;
        self.next = match self.step {
            0 => None,
            step => n.checked_add(step),
        };
        Some(n)
    }
}
