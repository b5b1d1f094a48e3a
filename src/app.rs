//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastHost;
use crate::pages::{incidents::IncidentsPage, notices::NoticesPage};
use crate::state::incidents::IncidentBoardState;
use crate::state::notices::NoticeBoardState;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the per-board state contexts and the app-level toast, and
/// lays out the sidebar shell around the two routed boards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let incidents = RwSignal::new(IncidentBoardState::default());
    let notices = RwSignal::new(NoticeBoardState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(incidents);
    provide_context(notices);
    provide_context(toast);

    view! {
        <Title text="Patroldesk"/>

        <Router>
            <div class="shell">
                <Sidebar/>
                <main class="shell__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=IncidentsPage/>
                        <Route path=StaticSegment("notices") view=NoticesPage/>
                    </Routes>
                </main>
            </div>
            <ToastHost/>
        </Router>
    }
}
