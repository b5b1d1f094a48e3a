//! Wire types for the incident/notice gateway.
//!
//! Field names follow the gateway's JSON exactly (`_id`, camelCase),
//! mapped onto snake_case Rust fields with serde renames. Everything
//! that the gateway may omit carries `#[serde(default)]` so a sparse
//! record still deserializes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A reported incident as returned by `GET /api/incidents/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub suspects: String,
    #[serde(default, rename = "suspectsDetails")]
    pub suspects_details: String,
    #[serde(default, rename = "incidentType")]
    pub incident_type: String,
    #[serde(default, rename = "incidentDetails")]
    pub incident_details: String,
    #[serde(default, rename = "submittedBy")]
    pub submitted_by: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: String,
}

/// Geolocation attached to an incident. Either coordinate may be
/// missing independently; only records with both are mappable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Incident {
    /// Both coordinates present, i.e. this incident can be placed on
    /// the map.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let loc = self.location.as_ref()?;
        Some((loc.latitude?, loc.longitude?))
    }
}

/// Partial update body for `PUT /api/incidents/edit/{id}`.
///
/// Carries exactly the fields the edit form exposes; the gateway
/// leaves every other field of the record untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IncidentPatch {
    pub suspects: String,
    #[serde(rename = "suspectsDetails")]
    pub suspects_details: String,
    #[serde(rename = "incidentType")]
    pub incident_type: String,
    #[serde(rename = "incidentDetails")]
    pub incident_details: String,
    pub time: String,
    pub comment: String,
}

/// An administrative notice as returned by `GET /api/notices/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: String,
}

/// Body for notice create and edit. Submitted as-is, empty fields
/// included; the gateway performs whatever validation it wants.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NoticeDraft {
    pub title: String,
    pub description: String,
}

/// Envelope for the incident list endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct IncidentsEnvelope {
    pub incidents: Vec<Incident>,
}

/// Envelope for the notice list endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct NoticesEnvelope {
    pub notices: Vec<Notice>,
}
