#[cfg(test)]
#[path = "incidents_test.rs"]
mod incidents_test;

use leptos::prelude::{Memo, RwSignal, With};

use crate::net::types::{Incident, IncidentPatch};

/// Memoized view of the incident list. Dedupes on equality so
/// consumers that only care about the list (table rows, the map) are
/// not re-run by draft keystrokes, modal toggles, or loading flips on
/// the same board signal.
pub fn incidents_memo(board: RwSignal<IncidentBoardState>) -> Memo<Vec<Incident>> {
    Memo::new(move |_| board.with(|b| b.incidents.clone()))
}

/// UI-local mirror of the six editable incident fields while a row is
/// in edit mode. Discarded on save or cancel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentDraft {
    pub suspects: String,
    pub suspects_details: String,
    pub incident_type: String,
    pub incident_details: String,
    pub time: String,
    pub comment: String,
}

impl IncidentDraft {
    fn from_incident(incident: &Incident) -> Self {
        Self {
            suspects: incident.suspects.clone(),
            suspects_details: incident.suspects_details.clone(),
            incident_type: incident.incident_type.clone(),
            incident_details: incident.incident_details.clone(),
            time: incident.time.clone(),
            comment: incident.comment.clone(),
        }
    }

    /// Request body carrying exactly the draft's fields.
    pub fn to_patch(&self) -> IncidentPatch {
        IncidentPatch {
            suspects: self.suspects.clone(),
            suspects_details: self.suspects_details.clone(),
            incident_type: self.incident_type.clone(),
            incident_details: self.incident_details.clone(),
            time: self.time.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// View state for the incidents board: the fetched list plus the
/// transient edit and image-modal state. The gateway stays the source
/// of truth; this is a cache re-synced after writes.
#[derive(Clone, Debug, Default)]
pub struct IncidentBoardState {
    pub incidents: Vec<Incident>,
    pub loading: bool,
    pub editing_id: Option<String>,
    pub draft: IncidentDraft,
    pub modal_image: Option<String>,
}

impl IncidentBoardState {
    /// Replace the cached list after a fetch.
    pub fn replace(&mut self, incidents: Vec<Incident>) {
        self.incidents = incidents;
    }

    /// Enter edit mode for an incident currently in the list. Returns
    /// false (leaving state untouched) for an unknown id.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(incident) = self.incidents.iter().find(|i| i.id == id) else {
            return false;
        };
        self.draft = IncidentDraft::from_incident(incident);
        self.editing_id = Some(id.to_owned());
        true
    }

    /// Leave edit mode, discarding the draft. No network involved.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.draft = IncidentDraft::default();
    }

    /// Merge a server-confirmed patch into the cached entry and leave
    /// edit mode. Only the six patch fields change; everything else on
    /// the row passes through.
    pub fn apply_update(&mut self, id: &str, patch: &IncidentPatch) {
        if let Some(incident) = self.incidents.iter_mut().find(|i| i.id == id) {
            incident.suspects.clone_from(&patch.suspects);
            incident.suspects_details.clone_from(&patch.suspects_details);
            incident.incident_type.clone_from(&patch.incident_type);
            incident.incident_details.clone_from(&patch.incident_details);
            incident.time.clone_from(&patch.time);
            incident.comment.clone_from(&patch.comment);
        }
        self.cancel_edit();
    }

    /// Flip the resolved flag on one cached entry after the gateway
    /// confirmed the flag-only update.
    pub fn mark_resolved(&mut self, id: &str) {
        if let Some(incident) = self.incidents.iter_mut().find(|i| i.id == id) {
            incident.resolved = true;
        }
    }

    pub fn open_image(&mut self, url: impl Into<String>) {
        self.modal_image = Some(url.into());
    }

    pub fn close_image(&mut self) {
        self.modal_image = None;
    }
}
