//! Incidents board: table, inline edit form, image modal, and map.

use leptos::prelude::*;

use crate::components::image_modal::ImageModal;
use crate::components::incident_form::IncidentForm;
use crate::components::incident_table::IncidentTable;
use crate::components::map_view::MapView;
use crate::components::spinner::Spinner;
use crate::components::toast::show_toast;
use crate::net::api;
use crate::state::incidents::IncidentBoardState;
use crate::state::toast::{ToastKind, ToastState};

/// Fetch all incidents and replace the cached list. The loading flag
/// covers the whole round trip; a failure leaves the old list in
/// place and surfaces one error toast.
pub fn load_incidents(board: RwSignal<IncidentBoardState>, toast: RwSignal<ToastState>) {
    board.update(|b| b.loading = true);
    leptos::task::spawn_local(async move {
        match api::fetch_incidents().await {
            Ok(list) => {
                board.update(|b| {
                    b.replace(list);
                    b.loading = false;
                });
            }
            Err(err) => {
                log::error!("failed to fetch incidents: {err}");
                board.update(|b| b.loading = false);
                show_toast(toast, ToastKind::Error, "Failed to fetch incidents");
            }
        }
    });
}

/// Incidents page — refreshes the list on every visit.
#[component]
pub fn IncidentsPage() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoardState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    load_incidents(board, toast);

    let heading = move || {
        if board.get().editing_id.is_some() {
            "UPDATE INCIDENT DETAILS"
        } else {
            "INCIDENT DETAILS"
        }
    };

    view! {
        <div class="board">
            <section class="panel panel--table">
                <h2 class="panel__title">{heading}</h2>
                <Show when=move || board.get().editing_id.is_some()>
                    <IncidentForm/>
                </Show>
                <Show when=move || !board.get().loading fallback=|| view! { <Spinner/> }>
                    <IncidentTable/>
                </Show>
            </section>
            <section class="panel panel--map">
                <MapView/>
            </section>
            <ImageModal/>
        </div>
    }
}
