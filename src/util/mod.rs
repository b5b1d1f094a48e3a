//! Small browser-adjacent helpers.

pub mod datetime;
