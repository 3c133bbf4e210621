use std::collections::vec_deque::{self, VecDeque};

use num_traits::ToPrimitive;

use crate::error::{SequenceError, WindowIndex};

/// The working buffer handed to a recurrence rule.
///
/// Values are ordered oldest first, so the most recent value is `back(1)`.
/// Rules only ever see a shared reference; the generator owns the buffer and is
/// the only one that appends to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<T> {
    values: VecDeque<T>,
}

impl<T> Window<T> {
    pub(crate) fn new(values: impl IntoIterator<Item = T>) -> Self {
        Window {
            values: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.values.iter()
    }

    /// Positional access from the oldest value.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.values
            .get(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index: WindowIndex::Front(index),
                len: self.len(),
            })
    }

    /// Positional access from the most recent value: `back(1)` reads the last
    /// element, `back(len)` the oldest one. An offset of zero is out of range.
    ///
    /// # Example
    /// ```
    /// use recursive_sequences::generator::build_recursive_sequence_generator;
    /// use recursive_sequences::window::Window;
    /// use recursive_sequences::SequenceError;
    ///
    /// let tribonacci = build_recursive_sequence_generator(
    ///     vec![0u64, 0, 1],
    ///     |w: &Window<u64>| Ok::<_, SequenceError>(w.back(1)? + w.back(2)? + w.back(3)?),
    ///     false,
    /// );
    /// let values: Result<Vec<u64>, _> = tribonacci.generate(7).unwrap().collect();
    /// assert_eq!(values.unwrap(), vec![0, 0, 1, 1, 2, 4, 7]);
    /// ```
    pub fn back(&self, offset: usize) -> Result<&T, SequenceError> {
        let len = self.len();
        if offset == 0 || offset > len {
            return Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(offset as i128),
                len,
            });
        }
        self.get(len - offset)
    }

    /// Like [`Window::back`], using a value of the sequence itself as the offset.
    /// Negative values are out of range rather than wrapping to the front.
    pub fn back_by<V: ToPrimitive>(&self, offset: &V) -> Result<&T, SequenceError> {
        match offset.to_usize() {
            Some(offset) => self.back(offset),
            None => Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(saturate(offset)),
                len: self.len(),
            }),
        }
    }

    /// Appends a freshly computed value, evicting the oldest one unless the full
    /// history is kept.
    pub(crate) fn advance(&mut self, value: T, keep_sequence: bool) {
        self.values.push_back(value);
        if !keep_sequence {
            self.values.pop_front();
        }
    }
}

fn saturate<V: ToPrimitive>(value: &V) -> i128 {
    match value.to_i128() {
        Some(value) => value,
        None if value.to_u128().is_some() => i128::MAX,
        None => i128::MIN,
    }
}

impl<'a, T> IntoIterator for &'a Window<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_reads_from_the_end() {
        let window = Window::new(vec![10, 20, 30]);
        assert_eq!(window.back(1), Ok(&30));
        assert_eq!(window.back(3), Ok(&10));
        assert_eq!(window.get(0), Ok(&10));
    }

    #[test]
    fn test_back_out_of_range() {
        let window = Window::new(vec![10, 20, 30]);
        assert_eq!(
            window.back(4),
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(4),
                len: 3
            })
        );
        assert_eq!(
            window.back(0),
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(0),
                len: 3
            })
        );
        assert_eq!(
            window.get(3),
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Front(3),
                len: 3
            })
        );
    }

    #[test]
    fn test_back_by_value() {
        let window = Window::new(vec![1i64, 1, 2]);
        assert_eq!(window.back_by(&2i64), Ok(&1));
    }

    #[test]
    fn test_back_by_negative_value_keeps_its_sign() {
        let window = Window::new(vec![5i64, 6, -2]);
        let offset = window.back(1).unwrap();
        assert_eq!(
            window.back_by(offset),
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(-2),
                len: 3
            })
        );
    }

    #[test]
    fn test_back_by_extreme_values() {
        let window = Window::new(vec![1i128, i128::MIN]);
        assert_eq!(
            window.back_by(&i128::MIN),
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(i128::MIN),
                len: 2
            })
        );
        assert_eq!(
            window.back_by(&u128::MAX),
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(i128::MAX),
                len: 2
            })
        );
    }

    #[test]
    fn test_extreme_offset_inside_a_sequence() {
        use crate::generator::SequenceGenerator;

        let generator = SequenceGenerator::new(
            vec![1i128, i128::MIN],
            |w: &Window<i128>| -> Result<i128, SequenceError> { Ok(*w.back_by(w.back(1)?)?) },
        );
        let result: Result<Vec<i128>, _> = generator.generate(3).unwrap().collect();
        assert_eq!(
            result,
            Err(SequenceError::IndexOutOfRange {
                index: WindowIndex::Back(i128::MIN),
                len: 2
            })
        );
    }

    #[test]
    fn test_advance_sliding_and_full() {
        let mut sliding = Window::new(vec![0, 1]);
        sliding.advance(1, false);
        sliding.advance(2, false);
        assert_eq!(sliding.iter().copied().collect::<Vec<_>>(), vec![1, 2]);

        let mut full = Window::new(vec![0, 1]);
        full.advance(1, true);
        full.advance(2, true);
        assert_eq!(full.iter().copied().collect::<Vec<_>>(), vec![0, 1, 1, 2]);
    }
}
