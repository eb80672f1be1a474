//! Random password generation and heuristic strength scoring.
//!
//! ```
//! use strongpass::pass::{self, ClassSet, Tier};
//!
//! let password = pass::generate(16, ClassSet::all()).unwrap();
//! assert_eq!(password.len(), 16);
//! assert_eq!(pass::score(&password).tier, Tier::Strong);
//! ```

pub mod entropy;
pub mod pass;
