//! Cross-module behaviour of the builders.

mod interval;
mod records;
mod repeating;
