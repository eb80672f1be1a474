//! Password generation and strength scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharClass, ClassSet};
pub use generate::{GenerateError, Password, generate, generate_with};
pub use strength::{Strength, Tier, score};

/// Shortest length the front-ends accept.
pub const MIN_LENGTH: usize = 5;
/// Longest length the front-ends accept.
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;

/// Clamp a requested length into `MIN_LENGTH..=MAX_LENGTH`.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}
