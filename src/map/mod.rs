//! Incident map: pure center/marker derivation and the Leaflet bridge.

pub mod leaflet;
pub mod view;
