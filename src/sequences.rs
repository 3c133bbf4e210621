//! Classic recurrences expressed through [`SequenceGenerator`].
//!
//! Every generator is generic over the element type, so the same rule drives `u64`
//! for small counts and `BigUint` when values outgrow machine integers.

use std::ops::Add;

use num_traits::ToPrimitive;

use crate::error::SequenceError;
use crate::generator::SequenceGenerator;
use crate::window::Window;

/// Function-pointer form of a rule, used by the named generators below.
pub type Rule<T> = fn(&Window<T>) -> Result<T, SequenceError>;

/// `w[-1] + w[-2]`
pub fn fibonacci_rule<T>(window: &Window<T>) -> Result<T, SequenceError>
where
    T: Clone + Add<Output = T>,
{
    Ok(window.back(1)?.clone() + window.back(2)?.clone())
}

/// `w[-2] + w[-3]`
pub fn perrin_rule<T>(window: &Window<T>) -> Result<T, SequenceError>
where
    T: Clone + Add<Output = T>,
{
    Ok(window.back(2)?.clone() + window.back(3)?.clone())
}

/// `w[-w[-1]] + w[-w[-2]]`: the two latest values are used as offsets into the
/// history, so the window has to keep the whole sequence.
pub fn hofstadter_q_rule<T>(window: &Window<T>) -> Result<T, SequenceError>
where
    T: Clone + Add<Output = T> + ToPrimitive,
{
    let first = window.back_by(window.back(1)?)?;
    let second = window.back_by(window.back(2)?)?;
    Ok(first.clone() + second.clone())
}

/// 0, 1, 1, 2, 3, 5, 8, ...
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use recursive_sequences::sequences;
///
/// let fibo = sequences::fibonacci::<BigUint>();
/// let last = fibo.generate(100).unwrap().last().unwrap().unwrap();
/// assert_eq!(last, BigUint::parse_bytes(b"218922995834555169026", 10).unwrap());
/// ```
pub fn fibonacci<T>() -> SequenceGenerator<T, Rule<T>>
where
    T: Clone + Add<Output = T> + From<u8>,
{
    SequenceGenerator::new(vec![T::from(0), T::from(1)], fibonacci_rule::<T> as Rule<T>)
}

/// 2, 1, 3, 4, 7, 11, ...
pub fn lucas<T>() -> SequenceGenerator<T, Rule<T>>
where
    T: Clone + Add<Output = T> + From<u8>,
{
    SequenceGenerator::new(vec![T::from(2), T::from(1)], fibonacci_rule::<T> as Rule<T>)
}

/// 3, 0, 2, 3, 2, 5, 5, 7, ...
pub fn perrin<T>() -> SequenceGenerator<T, Rule<T>>
where
    T: Clone + Add<Output = T> + From<u8>,
{
    SequenceGenerator::new(
        vec![T::from(3), T::from(0), T::from(2)],
        perrin_rule::<T> as Rule<T>,
    )
}

/// 1, 1, 2, 3, 3, 4, 5, 5, 6, 6, ...
pub fn hofstadter_q<T>() -> SequenceGenerator<T, Rule<T>>
where
    T: Clone + Add<Output = T> + ToPrimitive + From<u8>,
{
    SequenceGenerator::new(vec![T::from(1), T::from(1)], hofstadter_q_rule::<T> as Rule<T>)
        .keep_sequence(true)
}
