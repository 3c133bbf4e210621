use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::SequenceError;
use crate::window::Window;

/// A rule computing the next value of a sequence from the current window.
///
/// Implemented for every `Fn(&Window<T>) -> Result<T, SequenceError>`, so plain
/// closures and function pointers can be used directly. Rules are expected to be
/// pure; sharing a generator between threads is only deterministic if they are.
pub trait Recurrence<T> {
    fn next_value(&self, window: &Window<T>) -> Result<T, SequenceError>;
}

impl<T, F> Recurrence<T> for F
where
    F: Fn(&Window<T>) -> Result<T, SequenceError>,
{
    fn next_value(&self, window: &Window<T>) -> Result<T, SequenceError> {
        self(window)
    }
}

/// Factory for lazy recursive sequences.
///
/// Holds its own copy of the seed, so the caller's data can change freely after
/// construction. Every call to [`SequenceGenerator::generate`] starts from scratch
/// with a fresh working buffer.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<T, R> {
    seed: Vec<T>,
    recurrence: R,
    keep_sequence: bool,
}

/// Builds a generator from a seed window and a recurrence rule.
///
/// With `keep_sequence` set, the window handed to the rule grows with every computed
/// value; otherwise it slides and always holds `seed.len()` values.
///
/// # Example
/// ```
/// use recursive_sequences::generator::build_recursive_sequence_generator;
/// use recursive_sequences::window::Window;
/// use recursive_sequences::SequenceError;
///
/// let fibo = build_recursive_sequence_generator(
///     [0u64, 1].as_slice(),
///     |w: &Window<u64>| Ok::<_, SequenceError>(w.back(1)? + w.back(2)?),
///     false,
/// );
/// let values = fibo.generate(10)?.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn build_recursive_sequence_generator<T, R>(
    seed: impl Into<Vec<T>>,
    recurrence: R,
    keep_sequence: bool,
) -> SequenceGenerator<T, R>
where
    T: Clone,
    R: Recurrence<T>,
{
    SequenceGenerator::new(seed, recurrence).keep_sequence(keep_sequence)
}

impl<T, R> SequenceGenerator<T, R>
where
    T: Clone,
    R: Recurrence<T>,
{
    /// A sliding-window generator. See [`SequenceGenerator::keep_sequence`].
    pub fn new(seed: impl Into<Vec<T>>, recurrence: R) -> Self {
        SequenceGenerator {
            seed: seed.into(),
            recurrence,
            keep_sequence: false,
        }
    }

    pub fn keep_sequence(mut self, keep_sequence: bool) -> Self {
        self.keep_sequence = keep_sequence;
        self
    }

    pub fn seed(&self) -> &[T] {
        &self.seed
    }

    pub fn keeps_sequence(&self) -> bool {
        self.keep_sequence
    }

    /// Starts a new lazy sequence of `count` values.
    ///
    /// Fails with [`SequenceError::InvalidArgument`] when the seed is empty. Errors
    /// raised by the rule are yielded in place of the value they prevented, after
    /// which the sequence ends.
    pub fn generate(&self, count: usize) -> Result<Sequence<'_, T, R>, SequenceError> {
        if self.seed.is_empty() {
            return Err(SequenceError::invalid_argument("seed window must not be empty"));
        }
        debug!(
            "Generating {} values from a seed of {} (keep_sequence: {})",
            count,
            self.seed.len(),
            self.keep_sequence
        );
        Ok(Sequence {
            seed: &self.seed,
            recurrence: &self.recurrence,
            keep_sequence: self.keep_sequence,
            count,
            position: 0,
            phase: Phase::Seed,
        })
    }

    /// Same as [`SequenceGenerator::generate`] for a signed count, rejecting
    /// negative values with [`SequenceError::InvalidArgument`].
    pub fn try_generate(&self, count: i64) -> Result<Sequence<'_, T, R>, SequenceError> {
        let count = usize::try_from(count).map_err(|_| {
            SequenceError::invalid_argument(format!("count must not be negative, got {count}"))
        })?;
        self.generate(count)
    }
}

#[derive(Debug)]
enum Phase<T> {
    Seed,
    Compute(Window<T>),
    Done,
}

/// Lazy iterator returned by [`SequenceGenerator::generate`].
///
/// Yields the seed prefix first, then one computed value per call to `next`. The
/// working buffer is created only once the seed is exhausted and is dropped with
/// the iterator.
#[derive(Debug)]
pub struct Sequence<'a, T, R> {
    seed: &'a [T],
    recurrence: &'a R,
    keep_sequence: bool,
    count: usize,
    position: usize,
    phase: Phase<T>,
}

impl<'a, T, R> Iterator for Sequence<'a, T, R>
where
    T: Clone,
    R: Recurrence<T>,
{
    type Item = Result<T, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.count {
            self.phase = Phase::Done;
            return None;
        }

        if let Phase::Seed = self.phase {
            if let Some(value) = self.seed.get(self.position) {
                self.position += 1;
                return Some(Ok(value.clone()));
            }
            trace!("Seed exhausted after {} values", self.position);
            self.phase = Phase::Compute(Window::new(self.seed.iter().cloned()));
        }

        let keep_sequence = self.keep_sequence;
        match &mut self.phase {
            Phase::Compute(window) => match self.recurrence.next_value(window) {
                Ok(value) => {
                    window.advance(value.clone(), keep_sequence);
                    self.position += 1;
                    Some(Ok(value))
                }
                Err(err) => {
                    debug!("Recurrence failed at position {}: {}", self.position, err);
                    self.phase = Phase::Done;
                    Some(Err(err))
                }
            },
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.position;
        match self.phase {
            Phase::Done => (0, Some(0)),
            // Seed values cannot fail; a failing rule ends the sequence early.
            Phase::Seed => {
                let seeded = self.count.min(self.seed.len());
                (seeded.saturating_sub(self.position), Some(remaining))
            }
            Phase::Compute(_) => (0, Some(remaining)),
        }
    }
}

impl<'a, T, R> FusedIterator for Sequence<'a, T, R>
where
    T: Clone,
    R: Recurrence<T>,
{
}
