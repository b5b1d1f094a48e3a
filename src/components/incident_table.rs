//! Incidents table with resolve, edit, and image-viewer actions.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::api;
use crate::net::types::Incident;
use crate::state::incidents::{IncidentBoardState, incidents_memo};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::datetime::format_timestamp;

const HEADERS: [&str; 10] = [
    "Suspect's name",
    "Suspect's details",
    "Incident type",
    "Incident Details",
    "Submitted By",
    "Incident Time",
    "Submitted Date",
    "Status",
    "Image",
    "Actions",
];

/// Table of all incidents. Rows without coordinates still appear here
/// even though the map skips them.
///
/// Rows are rebuilt from the deduping list memo, so draft keystrokes
/// and modal toggles on the board signal leave the tbody alone.
#[component]
pub fn IncidentTable() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoardState>>();
    let incidents = incidents_memo(board);

    view! {
        <table class="table">
            <thead>
                <tr>
                    {HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    incidents
                        .get()
                        .into_iter()
                        .map(|incident| view! { <IncidentRow incident=incident/> })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn IncidentRow(incident: Incident) -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoardState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let id = incident.id.clone();
    let edit_id = incident.id.clone();
    let resolved = incident.resolved;

    let on_resolve = move |_| {
        let id = id.clone();
        leptos::task::spawn_local(async move {
            match api::resolve_incident(&id).await {
                Ok(()) => {
                    board.update(|b| b.mark_resolved(&id));
                    show_toast(toast, ToastKind::Success, "Incident resolved successfully");
                }
                Err(err) => {
                    log::error!("failed to resolve incident {id}: {err}");
                    show_toast(toast, ToastKind::Error, "Failed to resolve incident");
                }
            }
        });
    };

    let on_edit = move |_| {
        board.update(|b| {
            b.begin_edit(&edit_id);
        });
    };

    let image_cell = match incident.image.clone() {
        Some(url) => {
            let open = move |_| board.update(|b| b.open_image(url.clone()));
            view! {
                <span class="table__link" on:click=open>
                    "View"
                </span>
            }
            .into_any()
        }
        None => view! { <span>"No Image"</span> }.into_any(),
    };

    let status = if resolved {
        view! { <span class="status status--resolved">"Resolved"</span> }.into_any()
    } else {
        view! { <span class="status status--pending">"Pending"</span> }.into_any()
    };

    view! {
        <tr>
            <td>{incident.suspects}</td>
            <td>{incident.suspects_details}</td>
            <td>{incident.incident_type}</td>
            <td>{incident.incident_details}</td>
            <td>{incident.submitted_by}</td>
            <td>{incident.time}</td>
            <td>{format_timestamp(&incident.updated_at)}</td>
            <td>{status}</td>
            <td>{image_cell}</td>
            <td>
                <div class="table__actions">
                    <Show when=move || !resolved>
                        <button class="btn btn--success" on:click=on_resolve.clone()>
                            "Resolve"
                        </button>
                    </Show>
                    <button class="btn btn--primary" on:click=on_edit>
                        "Edit"
                    </button>
                </div>
            </td>
        </tr>
    }
}
