use super::*;

// =============================================================
// Incident deserialization
// =============================================================

#[test]
fn incident_deserializes_full_record() {
    let json = serde_json::json!({
        "_id": "64f1",
        "suspects": "J. Doe",
        "suspectsDetails": "Seen near the market",
        "incidentType": "Theft",
        "incidentDetails": "Stolen bicycle",
        "submittedBy": "officer-12",
        "time": "around noon",
        "comment": "second report this week",
        "image": "https://cdn.example/img.jpg",
        "location": { "latitude": 27.7, "longitude": 85.3 },
        "resolved": false,
        "updatedAt": "2024-03-01T10:00:00.000Z"
    });
    let incident: Incident = serde_json::from_value(json).unwrap();
    assert_eq!(incident.id, "64f1");
    assert_eq!(incident.suspects_details, "Seen near the market");
    assert_eq!(incident.submitted_by, "officer-12");
    assert_eq!(incident.image.as_deref(), Some("https://cdn.example/img.jpg"));
    assert_eq!(incident.coordinates(), Some((27.7, 85.3)));
    assert!(!incident.resolved);
}

#[test]
fn incident_deserializes_sparse_record() {
    let json = serde_json::json!({ "_id": "64f2" });
    let incident: Incident = serde_json::from_value(json).unwrap();
    assert_eq!(incident.id, "64f2");
    assert!(incident.suspects.is_empty());
    assert!(incident.image.is_none());
    assert!(incident.location.is_none());
    assert!(!incident.resolved);
}

#[test]
fn coordinates_require_both_axes() {
    let mut incident = Incident {
        location: Some(Location {
            latitude: Some(27.7),
            longitude: None,
        }),
        ..Incident::default()
    };
    assert_eq!(incident.coordinates(), None);

    incident.location = Some(Location {
        latitude: None,
        longitude: Some(85.3),
    });
    assert_eq!(incident.coordinates(), None);

    incident.location = Some(Location {
        latitude: Some(27.7),
        longitude: Some(85.3),
    });
    assert_eq!(incident.coordinates(), Some((27.7, 85.3)));
}

#[test]
fn coordinates_none_without_location() {
    assert_eq!(Incident::default().coordinates(), None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn incident_patch_serializes_camel_case() {
    let patch = IncidentPatch {
        suspects: "J. Doe".to_owned(),
        suspects_details: "details".to_owned(),
        incident_type: "Theft".to_owned(),
        incident_details: "more".to_owned(),
        time: "noon".to_owned(),
        comment: "c".to_owned(),
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value["suspectsDetails"], "details");
    assert_eq!(value["incidentType"], "Theft");
    assert_eq!(value["incidentDetails"], "more");
    // Exactly the six editable fields, nothing else.
    assert_eq!(value.as_object().unwrap().len(), 6);
}

#[test]
fn notice_draft_submits_empty_fields() {
    let value = serde_json::to_value(NoticeDraft::default()).unwrap();
    assert_eq!(value["title"], "");
    assert_eq!(value["description"], "");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn incidents_envelope_unwraps_list() {
    let json = serde_json::json!({ "incidents": [{ "_id": "a" }, { "_id": "b" }] });
    let envelope: IncidentsEnvelope = serde_json::from_value(json).unwrap();
    assert_eq!(envelope.incidents.len(), 2);
    assert_eq!(envelope.incidents[1].id, "b");
}

#[test]
fn notices_envelope_unwraps_list() {
    let json = serde_json::json!({
        "notices": [{ "_id": "n1", "title": "Curfew", "description": "10pm", "updatedAt": "" }]
    });
    let envelope: NoticesEnvelope = serde_json::from_value(json).unwrap();
    assert_eq!(envelope.notices.len(), 1);
    assert_eq!(envelope.notices[0].title, "Curfew");
}
