//! ISO 8601 builder layer.
//!
//! ## Submodules
//!
//! - [`record`] - Intermediate records produced by the parsing layer
//! - [`validate`] - Numeric casting and bounds checks
//! - [`calendar`] - Calendar, week and ordinal date normalization
//! - [`duration`] - Exact-elapsed and calendar-relative duration strategies
//! - [`build`] - The builders and the repeating-interval generator
//! - [`core`] - Resolved value types and the fixed-offset timezone

pub mod build;
pub mod calendar;
pub mod core;
pub mod duration;
pub mod record;
pub mod validate;
