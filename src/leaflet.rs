// Leaflet bindings. Only the slice of the `L` API the map view needs.

use crate::error::{Result, TravelMapError};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(container_id: &str) -> std::result::Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &LatLngBounds, options: &JsValue) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn new_div_icon(options: &JsValue) -> DivIcon;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &HtmlElement) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    pub type LatLngBounds;

    #[wasm_bindgen(js_namespace = L, js_name = latLngBounds)]
    fn new_lat_lng_bounds(corners: &JsValue) -> LatLngBounds;
}

/// Serializes through JSON so options structs can stay plain serde types.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let raw = serde_json::to_string(value).map_err(|e| TravelMapError::Js(e.to_string()))?;
    Ok(js_sys::JSON::parse(&raw)?)
}

pub fn map(container_id: &str, center: [f64; 2], zoom: f64) -> Result<Map> {
    let map = new_map(container_id)?;
    map.set_view(&to_js(&center)?, zoom);
    Ok(map)
}

pub fn tile_layer<O: Serialize>(url_template: &str, options: &O) -> Result<TileLayer> {
    Ok(new_tile_layer(url_template, &to_js(options)?))
}

pub fn div_icon<O: Serialize>(options: &O) -> Result<DivIcon> {
    Ok(new_div_icon(&to_js(options)?))
}

pub fn marker(lat: f64, lon: f64, icon: &DivIcon) -> Result<Marker> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("icon"), icon)?;
    Ok(new_marker(&to_js(&[lat, lon])?, &options))
}

pub fn lat_lng_bounds(corners: [[f64; 2]; 2]) -> Result<LatLngBounds> {
    Ok(new_lat_lng_bounds(&to_js(&corners)?))
}
