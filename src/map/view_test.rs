use super::*;
use crate::net::types::Location;

fn located(id: &str, lat: Option<f64>, lng: Option<f64>) -> Incident {
    Incident {
        id: id.to_owned(),
        incident_type: "Theft".to_owned(),
        incident_details: "details".to_owned(),
        submitted_by: "officer-1".to_owned(),
        location: Some(Location {
            latitude: lat,
            longitude: lng,
        }),
        ..Incident::default()
    }
}

fn unlocated(id: &str) -> Incident {
    Incident {
        id: id.to_owned(),
        ..Incident::default()
    }
}

// =============================================================
// Center derivation
// =============================================================

#[test]
fn center_falls_back_when_list_is_empty() {
    assert_eq!(map_center(&[]), DEFAULT_CENTER);
}

#[test]
fn center_falls_back_when_no_incident_has_both_coordinates() {
    let incidents = vec![
        unlocated("1"),
        located("2", Some(27.7), None),
        located("3", None, Some(85.3)),
    ];
    assert_eq!(map_center(&incidents), DEFAULT_CENTER);
}

#[test]
fn center_is_first_incident_with_both_coordinates() {
    let incidents = vec![
        unlocated("1"),
        located("2", Some(27.7), Some(85.3)),
        located("3", Some(28.2), Some(83.9)),
    ];
    assert_eq!(map_center(&incidents), (27.7, 85.3));
}

// =============================================================
// Marker derivation
// =============================================================

#[test]
fn marker_count_equals_fully_located_incidents() {
    let incidents = vec![
        located("1", Some(27.7), Some(85.3)),
        unlocated("2"),
        located("3", Some(28.2), None),
        located("4", Some(28.2), Some(83.9)),
    ];
    assert_eq!(markers(&incidents).len(), 2);
}

#[test]
fn markers_carry_popup_fields() {
    let incidents = vec![located("1", Some(27.7), Some(85.3))];
    let specs = markers(&incidents);
    assert_eq!(
        specs[0],
        MarkerSpec {
            lat: 27.7,
            lng: 85.3,
            incident_type: "Theft".to_owned(),
            details: "details".to_owned(),
            submitted_by: "officer-1".to_owned(),
        }
    );
}

#[test]
fn popup_html_shows_type_details_submitter() {
    let specs = markers(&[located("1", Some(27.7), Some(85.3))]);
    let html = popup_html(&specs[0]);
    assert_eq!(
        html,
        "<h1>Theft</h1><p>details</p><h2>Submitted By: officer-1</h2>"
    );
}

#[test]
fn popup_html_escapes_free_text() {
    let marker = MarkerSpec {
        lat: 0.0,
        lng: 0.0,
        incident_type: "<script>".to_owned(),
        details: "a & b".to_owned(),
        submitted_by: "\"anon\"".to_owned(),
    };
    let html = popup_html(&marker);
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(html.contains("&quot;anon&quot;"));
}

#[test]
fn single_located_incident_yields_one_marker_centered_on_it() {
    let incidents = vec![located("1", Some(27.7), Some(85.3))];
    assert_eq!(markers(&incidents).len(), 1);
    assert_eq!(map_center(&incidents), (27.7, 85.3));
}
