//! Routed pages, one per board.

pub mod incidents;
pub mod notices;
