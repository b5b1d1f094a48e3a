//! Inline edit form for the six editable incident fields.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::api;
use crate::state::incidents::IncidentBoardState;
use crate::state::toast::{ToastKind, ToastState};

/// One labeled text input bound to a draft field.
#[component]
fn DraftField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form__label">{label}</label>
        <input
            class="form__input"
            type="text"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Edit form shown while an incident is in edit mode.
///
/// Saving sends a partial update for the recorded id; on success the
/// same fields are merged into the cached row (no re-fetch). On
/// failure edit state stays intact so the operator can retry.
#[component]
pub fn IncidentForm() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoardState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_save = move |_| {
        let Some(id) = board.with_untracked(|b| b.editing_id.clone()) else {
            return;
        };
        let patch = board.with_untracked(|b| b.draft.to_patch());
        leptos::task::spawn_local(async move {
            match api::update_incident(&id, &patch).await {
                Ok(()) => {
                    board.update(|b| b.apply_update(&id, &patch));
                    show_toast(toast, ToastKind::Success, "Incident updated successfully");
                }
                Err(err) => {
                    log::error!("failed to update incident {id}: {err}");
                    show_toast(toast, ToastKind::Error, "Failed to update incident");
                }
            }
        });
    };

    let on_cancel = move |_| board.update(IncidentBoardState::cancel_edit);

    view! {
        <div class="form">
            <DraftField
                label="Suspect's Name"
                value=Signal::derive(move || board.get().draft.suspects)
                on_input=Callback::new(move |v| board.update(|b| b.draft.suspects = v))
            />
            <DraftField
                label="Suspect's Details"
                value=Signal::derive(move || board.get().draft.suspects_details)
                on_input=Callback::new(move |v| board.update(|b| b.draft.suspects_details = v))
            />
            <DraftField
                label="Incident Type"
                value=Signal::derive(move || board.get().draft.incident_type)
                on_input=Callback::new(move |v| board.update(|b| b.draft.incident_type = v))
            />
            <DraftField
                label="Incident Details"
                value=Signal::derive(move || board.get().draft.incident_details)
                on_input=Callback::new(move |v| board.update(|b| b.draft.incident_details = v))
            />
            <DraftField
                label="Time"
                value=Signal::derive(move || board.get().draft.time)
                on_input=Callback::new(move |v| board.update(|b| b.draft.time = v))
            />
            <DraftField
                label="Comment"
                value=Signal::derive(move || board.get().draft.comment)
                on_input=Callback::new(move |v| board.update(|b| b.draft.comment = v))
            />
            <div class="form__actions">
                <button class="btn btn--primary" on:click=on_save>
                    "Update Incident"
                </button>
                <button class="btn" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
