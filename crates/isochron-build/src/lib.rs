//! Builders that turn decomposed ISO 8601 fields into validated temporal values.
//!
//! The parsing layer splits text such as `1981-W14-7T24:00Z` into string-typed
//! records ([`iso::record`]). This crate owns everything after that point:
//! numeric conversion, bounds checking, calendar normalization, duration
//! resolution, interval endpoints and repeating-interval generation.
//!
//! ```rust
//! use isochron_build::iso::build::{ConcreteBuilder, TimeBuilder};
//! use isochron_build::iso::record::DateFields;
//!
//! let builder = ConcreteBuilder::new();
//! let date = builder.build_date(&DateFields::week("2009", "53", Some("7"))).unwrap();
//! assert_eq!(date.to_string(), "2010-01-03");
//! ```

pub mod constants;
pub mod error;
pub mod iso;

pub use error::{BuildError, BuildResult};
