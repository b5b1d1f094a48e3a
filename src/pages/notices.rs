//! Notices board: create/edit form above the notices list.

use leptos::prelude::*;

use crate::components::notice_form::NoticeForm;
use crate::components::notice_table::NoticeTable;
use crate::components::spinner::Spinner;
use crate::components::toast::show_toast;
use crate::net::api;
use crate::state::notices::NoticeBoardState;
use crate::state::toast::{ToastKind, ToastState};

/// Fetch all notices and replace the cached list. Also called after
/// every successful create/update since create needs the
/// server-assigned id.
pub fn load_notices(board: RwSignal<NoticeBoardState>, toast: RwSignal<ToastState>) {
    board.update(|b| b.loading = true);
    leptos::task::spawn_local(async move {
        match api::fetch_notices().await {
            Ok(list) => {
                board.update(|b| {
                    b.replace(list);
                    b.loading = false;
                });
            }
            Err(err) => {
                log::error!("failed to fetch notices: {err}");
                board.update(|b| b.loading = false);
                show_toast(toast, ToastKind::Error, "Failed to fetch notices");
            }
        }
    });
}

/// Notices page — refreshes the list on every visit.
#[component]
pub fn NoticesPage() -> impl IntoView {
    let board = expect_context::<RwSignal<NoticeBoardState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    load_notices(board, toast);

    let heading = move || {
        if board.get().is_editing() {
            "EDIT NOTICE"
        } else {
            "SEND NOTICE"
        }
    };

    view! {
        <div class="board">
            <section class="panel">
                <h2 class="panel__title">{heading}</h2>
                <NoticeForm/>
                <h2 class="panel__title">"NOTICES LIST"</h2>
                <Show when=move || !board.get().loading fallback=|| view! { <Spinner/> }>
                    <NoticeTable/>
                </Show>
            </section>
        </div>
    }
}
