//! Notices list table with per-row edit.

use leptos::prelude::*;

use crate::net::types::Notice;
use crate::state::notices::NoticeBoardState;
use crate::util::datetime::format_timestamp;

/// Table of all notices. The row currently being edited swaps its
/// Edit action for an inline Cancel.
#[component]
pub fn NoticeTable() -> impl IntoView {
    let board = expect_context::<RwSignal<NoticeBoardState>>();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Details"</th>
                    <th>"Date"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    board
                        .get()
                        .notices
                        .into_iter()
                        .map(|notice| view! { <NoticeRow notice=notice/> })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn NoticeRow(notice: Notice) -> impl IntoView {
    let board = expect_context::<RwSignal<NoticeBoardState>>();

    let id = notice.id.clone();
    let row_id = notice.id.clone();
    let is_editing = move || board.get().editing_id.as_deref() == Some(row_id.as_str());

    let on_edit = move |_| {
        board.update(|b| {
            b.begin_edit(&id);
        });
    };
    let on_cancel = move |_| board.update(NoticeBoardState::cancel_edit);

    view! {
        <tr>
            <td class="table__strong">{notice.title}</td>
            <td>{notice.description}</td>
            <td>{format_timestamp(&notice.updated_at)}</td>
            <td>
                <Show
                    when=is_editing
                    fallback=move || {
                        view! {
                            <button class="table__link" on:click=on_edit.clone()>
                                "Edit"
                            </button>
                        }
                    }
                >
                    <button class="table__link table__link--danger" on:click=on_cancel>
                        "Cancel"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
