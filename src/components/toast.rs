//! Transient success/error notification, rendered app-level.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::toast::{TOAST_DISMISS_MS, ToastKind, ToastState};

/// Show a toast and arm its auto-dismiss timer. A toast shown later
/// supersedes this one; the stale timer then no-ops via the sequence
/// check in `clear_if`.
pub fn show_toast(toast: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let seq = {
        let mut state = toast.write();
        state.show(kind, message)
    };
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        toast.update(|state| {
            state.clear_if(seq);
        });
    });
}

/// Fixed-position host rendering the current toast, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toast
                .get()
                .current
                .map(|t| {
                    let class = match t.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! { <div class=class>{t.message}</div> }
                })
        }}
    }
}
