//! Pure derivation of map center and markers from the incident list.
//!
//! No caching and no mutation: recomputed from scratch whenever the
//! list changes, then handed to the Leaflet bridge to render.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::Incident;

/// Fallback center (Kathmandu) when no incident carries coordinates.
pub const DEFAULT_CENTER: (f64, f64) = (27.6588, 85.3247);

/// Initial zoom level for the incident map.
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Everything the bridge needs to place one marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub incident_type: String,
    pub details: String,
    pub submitted_by: String,
}

/// Center = coordinates of the first incident with both latitude and
/// longitude present, else [`DEFAULT_CENTER`].
pub fn map_center(incidents: &[Incident]) -> (f64, f64) {
    incidents
        .iter()
        .find_map(Incident::coordinates)
        .unwrap_or(DEFAULT_CENTER)
}

/// One marker per incident with both coordinates. Incidents without a
/// full location are skipped here but still appear in the table.
pub fn markers(incidents: &[Incident]) -> Vec<MarkerSpec> {
    incidents
        .iter()
        .filter_map(|incident| {
            let (lat, lng) = incident.coordinates()?;
            Some(MarkerSpec {
                lat,
                lng,
                incident_type: incident.incident_type.clone(),
                details: incident.incident_details.clone(),
                submitted_by: incident.submitted_by.clone(),
            })
        })
        .collect()
}

/// Popup markup for one marker: type, details, submitter. Field values
/// are escaped since they are operator-entered free text.
pub fn popup_html(marker: &MarkerSpec) -> String {
    format!(
        "<h1>{}</h1><p>{}</p><h2>Submitted By: {}</h2>",
        escape(&marker.incident_type),
        escape(&marker.details),
        escape(&marker.submitted_by),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
