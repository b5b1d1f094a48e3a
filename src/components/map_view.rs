//! Leaflet map host. Mounts the map once the container exists, then
//! re-syncs center and markers from the incident list on every change.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::map::leaflet::LeafletMap;
use crate::map::view::{self, DEFAULT_ZOOM};
use crate::state::incidents::{IncidentBoardState, incidents_memo};

const MAP_CONTAINER_ID: &str = "incident-map";

thread_local! {
    static MAP_BINDING: RefCell<Option<LeafletMap>> = const { RefCell::new(None) };
}

/// Map panel under the incidents table.
///
/// Center and markers are a pure function of the current list; the
/// map instance itself lives outside the reactive graph and is torn
/// down when the page unmounts. The effect tracks the list through a
/// deduping memo, not the whole board signal, so form keystrokes and
/// modal toggles never recenter the map or rebuild markers.
#[component]
pub fn MapView() -> impl IntoView {
    let board = expect_context::<RwSignal<IncidentBoardState>>();
    let incidents = incidents_memo(board);

    Effect::new(move || {
        let incidents = incidents.get();
        let center = view::map_center(&incidents);
        let specs = view::markers(&incidents);

        MAP_BINDING.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_none() {
                match LeafletMap::mount(MAP_CONTAINER_ID, center, DEFAULT_ZOOM) {
                    Ok(map) => *slot = Some(map),
                    Err(err) => {
                        log::error!("failed to mount map: {err}");
                        return;
                    }
                }
            }
            if let Some(map) = slot.as_ref() {
                if let Err(err) = map.set_view(center, DEFAULT_ZOOM) {
                    log::error!("failed to recenter map: {err}");
                }
                if let Err(err) = map.set_markers(&specs) {
                    log::error!("failed to place markers: {err}");
                }
            }
        });
    });

    on_cleanup(move || {
        MAP_BINDING.with(|slot| {
            if let Some(map) = slot.borrow_mut().take() {
                map.remove();
            }
        });
    });

    view! { <div class="map-view" id=MAP_CONTAINER_ID></div> }
}
