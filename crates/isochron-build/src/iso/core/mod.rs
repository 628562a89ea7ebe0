//! Resolved temporal values.
//!
//! Everything here is an immutable owned value. Builders hand these back to
//! the caller; nothing refers back to the records that produced them.

mod offset;
mod value;

pub use offset::UtcOffset;
pub use value::{DateTime, Moment, ResolvedInterval, Time};
