use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes F(i) by direct double recursion.
///
/// Runs in exponential time and is only meant to show the textbook definition;
/// use [`get_fibonacci_sequence`] or [`crate::sequences::fibonacci`] for anything real.
///
/// # Example
/// ```
/// use recursive_sequences::fibonacci::get_fibonacci_number;
/// use num_bigint::BigUint;
/// assert_eq!(get_fibonacci_number(10), BigUint::from(55u32));
/// ```
pub fn get_fibonacci_number(i: u32) -> BigUint {
    match i {
        0 => BigUint::zero(),
        1 => BigUint::one(),
        _ => get_fibonacci_number(i - 1) + get_fibonacci_number(i - 2),
    }
}

/// Generates the first `n` Fibonacci numbers eagerly.
///
/// Each number is the sum of the two previous entries of the vector, so this runs
/// in O(n) time and uses O(n) space.
///
/// # Example
/// ```
/// use recursive_sequences::fibonacci;
/// use num_bigint::BigUint;
/// let fib_sequence = fibonacci::get_fibonacci_sequence(10);
/// assert_eq!(fib_sequence[9], BigUint::from(34u32));
/// ```
pub fn get_fibonacci_sequence(n: usize) -> Vec<BigUint> {
    let mut fib_sequence = Vec::with_capacity(n.max(2));
    fib_sequence.push(BigUint::zero());
    fib_sequence.push(BigUint::one());
    for i in 2..n {
        let next_value = &fib_sequence[i - 1] + &fib_sequence[i - 2];
        fib_sequence.push(next_value);
    }
    fib_sequence.truncate(n);
    fib_sequence
}

/// Lazy iterator over the first `n` Fibonacci numbers, holding only the last two.
pub fn fibonacci_numbers(n: usize) -> FibonacciNumbers {
    FibonacciNumbers {
        previous: BigUint::zero(),
        current: BigUint::one(),
        remaining: n,
    }
}

#[derive(Debug, Clone)]
pub struct FibonacciNumbers {
    previous: BigUint,
    current: BigUint,
    remaining: usize,
}

impl Iterator for FibonacciNumbers {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let succeeding = &self.previous + &self.current;
        let current = std::mem::replace(&mut self.current, succeeding);
        Some(std::mem::replace(&mut self.previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FibonacciNumbers {}

impl FusedIterator for FibonacciNumbers {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_fibonacci_number() {
        let values: Vec<BigUint> = (0..10).map(get_fibonacci_number).collect();
        let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34]
            .into_iter()
            .map(BigUint::from)
            .collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_get_fibonacci_sequence_short() {
        assert!(get_fibonacci_sequence(0).is_empty());
        assert_eq!(get_fibonacci_sequence(1), vec![BigUint::zero()]);
        assert_eq!(
            get_fibonacci_sequence(2),
            vec![BigUint::zero(), BigUint::one()]
        );
    }

    #[test]
    fn test_fibonacci_numbers_matches_eager_list() {
        let lazy: Vec<BigUint> = fibonacci_numbers(50).collect();
        assert_eq!(lazy, get_fibonacci_sequence(50));
        assert_eq!(fibonacci_numbers(0).count(), 0);
        assert_eq!(fibonacci_numbers(1).collect::<Vec<_>>(), vec![BigUint::zero()]);
        assert_eq!(fibonacci_numbers(7).len(), 7);
    }

    #[test]
    fn test_eager_list_agrees_with_recursion() {
        let sequence = get_fibonacci_sequence(25);
        for (i, value) in sequence.iter().enumerate() {
            assert_eq!(*value, get_fibonacci_number(i as u32));
        }
        assert_eq!(
            get_fibonacci_sequence(100)[99],
            BigUint::parse_bytes(b"218922995834555169026", 10).unwrap()
        );
    }
}
