//! Notice form serving both create and edit.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::api;
use crate::pages::notices::load_notices;
use crate::state::notices::NoticeBoardState;
use crate::state::toast::{ToastKind, ToastState};

/// Single form for sending a new notice or updating the one being
/// edited. No client-side validation: an empty draft is submitted
/// as-is and the gateway decides.
///
/// Submit branches on `editing_id` (update vs create); both branches
/// clear the form and re-fetch the list on success.
#[component]
pub fn NoticeForm() -> impl IntoView {
    let board = expect_context::<RwSignal<NoticeBoardState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |_| {
        let draft = board.with_untracked(NoticeBoardState::draft);
        let editing_id = board.with_untracked(|b| b.editing_id.clone());
        leptos::task::spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_notice(id, &draft).await,
                None => api::create_notice(&draft).await,
            };
            match result {
                Ok(()) => {
                    board.update(NoticeBoardState::cancel_edit);
                    let message = if editing_id.is_some() {
                        "Notice updated successfully!"
                    } else {
                        "Notice created successfully!"
                    };
                    show_toast(toast, ToastKind::Success, message);
                    load_notices(board, toast);
                }
                Err(err) => {
                    log::error!("failed to send notice: {err}");
                    show_toast(toast, ToastKind::Error, "Error sending notice");
                }
            }
        });
    };

    let on_cancel = move |_| board.update(NoticeBoardState::cancel_edit);

    view! {
        <div class="form">
            <label class="form__label">"Title"</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || board.get().title
                on:input=move |ev| board.update(|b| b.title = event_target_value(&ev))
            />
            <label class="form__label">"Description"</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || board.get().description
                on:input=move |ev| board.update(|b| b.description = event_target_value(&ev))
            />
            <div class="form__actions">
                <button class="btn btn--primary" on:click=on_submit>
                    {move || if board.get().is_editing() { "UPDATE NOTICE" } else { "SEND NOTICE" }}
                </button>
                <Show when=move || board.get().is_editing()>
                    <button class="btn btn--danger" on:click=on_cancel>
                        "Cancel Update"
                    </button>
                </Show>
            </div>
        </div>
    }
}
