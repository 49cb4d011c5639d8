//! Core types - pure abstractions shared across the codebase.

mod field;
mod freq;
mod mode;
mod priority;

pub use field::{Field, emitted};
pub use freq::ChangeFreq;
pub use mode::BuildMode;
pub use priority::Priority;
