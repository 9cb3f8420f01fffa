//! Utility functions for parsing loosely-typed service fields.

pub mod timestamp;

pub use timestamp::{parse_timestamp, parse_timestamp_str};
