//! # patroldesk
//!
//! Leptos + WASM admin dashboard for a police-incident reporting
//! platform. Two boards — incidents (table + Leaflet map) and notices
//! (create/edit form + list) — backed directly by the remote HTTP
//! gateway, which owns all persistent state. The UI is a thin,
//! eventually-consistent cache re-synced after every write.

pub mod app;
pub mod components;
pub mod map;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
