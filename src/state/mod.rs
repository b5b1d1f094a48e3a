//! Per-board view state.
//!
//! Each board's transient UI state is an explicit struct with pure
//! transition methods, provided app-wide as an `RwSignal` context.
//! None of it is authoritative; the gateway owns the data.

pub mod incidents;
pub mod notices;
pub mod toast;
