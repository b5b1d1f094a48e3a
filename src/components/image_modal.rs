//! Modal viewer for an incident's attached image.

use leptos::prelude::*;

use crate::state::incidents::IncidentBoardState;

/// Overlay shown while `modal_image` is set; closing clears it.
#[component]
pub fn ImageModal() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoardState>>();

    let on_close = move |_| board.update(IncidentBoardState::close_image);

    view! {
        {move || {
            board
                .get()
                .modal_image
                .map(|url| {
                    view! {
                        <div class="modal-backdrop">
                            <div class="modal">
                                <h2 class="modal__title">"Incident Image"</h2>
                                <img class="modal__image" src=url alt="Incident"/>
                                <button class="btn btn--danger" on:click=on_close>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
