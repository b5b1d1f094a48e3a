//! Thin bridge to the Leaflet global (`window.L`, loaded from
//! `index.html`). All calls go through `js_sys::Reflect` so the crate
//! needs no generated bindings for Leaflet itself.
//!
//! Only callable in a browser; the map component is the sole caller.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::view::{self, MarkerSpec};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Handle to one mounted Leaflet map plus the layer group holding the
/// incident markers.
pub struct LeafletMap {
    map: JsValue,
    marker_layer: JsValue,
}

fn leaflet_global() -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_owned())?;
    let l = Reflect::get(&window, &JsValue::from_str("L"))
        .map_err(|_| "failed to access window.L".to_owned())?;
    if l.is_undefined() || l.is_null() {
        return Err("Leaflet not loaded".to_owned());
    }
    Ok(l)
}

fn get_fn(target: &JsValue, name: &str) -> Result<Function, String> {
    let value = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| format!("failed to access {name}"))?;
    value
        .dyn_into::<Function>()
        .map_err(|_| format!("{name} is not a function"))
}

fn call1(target: &JsValue, name: &str, arg: &JsValue) -> Result<JsValue, String> {
    get_fn(target, name)?
        .call1(target, arg)
        .map_err(|e| format!("{name} failed: {e:?}"))
}

fn call2(target: &JsValue, name: &str, a: &JsValue, b: &JsValue) -> Result<JsValue, String> {
    get_fn(target, name)?
        .call2(target, a, b)
        .map_err(|e| format!("{name} failed: {e:?}"))
}

fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let pair = Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair.into()
}

impl LeafletMap {
    /// Create a map inside the element with the given id, add the OSM
    /// tile layer, and attach an empty marker layer group.
    pub fn mount(container_id: &str, center: (f64, f64), zoom: f64) -> Result<Self, String> {
        let l = leaflet_global()?;
        let map = call1(&l, "map", &JsValue::from_str(container_id))?;
        call2(&map, "setView", &lat_lng(center.0, center.1), &JsValue::from_f64(zoom))?;

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("attribution"),
            &JsValue::from_str(TILE_ATTRIBUTION),
        )
        .map_err(|_| "failed to build tile options".to_owned())?;
        let tiles = call2(&l, "tileLayer", &JsValue::from_str(TILE_URL), &options)?;
        call1(&tiles, "addTo", &map)?;

        let marker_layer = get_fn(&l, "layerGroup")?
            .call0(&l)
            .map_err(|e| format!("layerGroup failed: {e:?}"))?;
        call1(&marker_layer, "addTo", &map)?;

        Ok(Self { map, marker_layer })
    }

    /// Recenter without changing markers.
    pub fn set_view(&self, center: (f64, f64), zoom: f64) -> Result<(), String> {
        call2(
            &self.map,
            "setView",
            &lat_lng(center.0, center.1),
            &JsValue::from_f64(zoom),
        )?;
        Ok(())
    }

    /// Replace all markers with the given set.
    pub fn set_markers(&self, specs: &[MarkerSpec]) -> Result<(), String> {
        let l = leaflet_global()?;
        get_fn(&self.marker_layer, "clearLayers")?
            .call0(&self.marker_layer)
            .map_err(|e| format!("clearLayers failed: {e:?}"))?;

        for spec in specs {
            let marker = call1(&l, "marker", &lat_lng(spec.lat, spec.lng))?;
            call1(
                &marker,
                "bindPopup",
                &JsValue::from_str(&view::popup_html(spec)),
            )?;
            call1(&marker, "addTo", &self.marker_layer)?;
        }
        Ok(())
    }

    /// Tear the map down, releasing its DOM bindings.
    pub fn remove(&self) {
        if let Ok(remove) = get_fn(&self.map, "remove") {
            let _ = remove.call0(&self.map);
        }
    }
}
