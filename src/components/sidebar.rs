//! Sidebar navigation linking the two boards.

use leptos::prelude::*;

/// Admin panel sidebar with links to the incidents and notices boards.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar">
            <h1 class="sidebar__title">"Admin Panel"</h1>
            <nav class="sidebar__nav">
                <a href="/" class="sidebar__link">
                    "INCIDENTS"
                </a>
                <a href="/notices" class="sidebar__link">
                    "NOTICES"
                </a>
            </nav>
        </div>
    }
}
