//! # Recursive Sequence Library
//!
//! This library generates integer sequences defined by recurrences. Its core is a
//! builder that turns a seed window and a recurrence rule into a factory of lazy
//! iterators, so Fibonacci, Lucas, Perrin and Hofstadter-Q all share one
//! implementation. A few standalone Fibonacci utilities and a small sorting helper
//! come along with it.
//!
//! ## Overview of Modules
//!
//! ### Errors
//! - `SequenceError`: `InvalidArgument` for an empty seed or a negative count, and
//!   `IndexOutOfRange` when a recurrence rule reads outside its window.
//!
//! ### Generator
//!
//! #### `generator::build_recursive_sequence_generator`
//! Captures a copy of the seed, the rule and the history mode, and returns a
//! `SequenceGenerator`. Every call to `generate(count)` returns a fresh `Sequence`
//! iterator with its own working buffer, yielding the seed prefix first and then one
//! computed value per step.
//!
//! #### `window::Window`
//! The working buffer seen by a rule, with explicit from-the-end indexing
//! (`back(1)` is the latest value). When the full history is not kept it slides and
//! always holds as many values as the seed.
//!
//! ### Named sequences
//! `sequences::{fibonacci, lucas, perrin, hofstadter_q}`, generic over the element
//! type (`u64`, `BigUint`, ...).
//!
//! ### Fibonacci utilities
//! - `fibonacci::get_fibonacci_number`: textbook double recursion, exponential time.
//! - `fibonacci::get_fibonacci_sequence`: eager list in O(n).
//! - `fibonacci::fibonacci_numbers`: lazy iterator keeping two values.
//!
//! ### Sorting
//! `decimals::get_sorted_dict_by_decimals` orders entries by the fractional part of
//! their value.
//!
//! ## Usage Example
//! ```rust
//! use recursive_sequences::generator::build_recursive_sequence_generator;
//! use recursive_sequences::window::Window;
//! use recursive_sequences::SequenceError;
//!
//! let perrin = build_recursive_sequence_generator(
//!     vec![3u32, 0, 2],
//!     |w: &Window<u32>| Ok::<_, SequenceError>(w.back(2)? + w.back(3)?),
//!     false,
//! );
//! let values: Vec<u32> = perrin.generate(10)?.collect::<Result<_, _>>()?;
//! assert_eq!(values, vec![3, 0, 2, 3, 2, 5, 5, 7, 10, 12]);
//! # Ok::<(), SequenceError>(())
//! ```

pub mod decimals;
pub mod error;
pub mod fibonacci;
pub mod generator;
pub mod sequences;
pub mod window;

pub use error::{SequenceError, WindowIndex};
pub use generator::{build_recursive_sequence_generator, Recurrence, Sequence, SequenceGenerator};
pub use window::Window;
