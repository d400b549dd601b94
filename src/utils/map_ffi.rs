// ============================================================================
// MAP FFI - Foreign Function Interface para static/map.js (Leaflet)
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLocationMap)]
    pub fn init_location_map(container_id: &str, is_dark: bool, lat: f64, lng: f64, zoom: f64);

    /// `markers_json`: array de `MapMarker`
    #[wasm_bindgen(js_name = renderLocationMarkers)]
    pub fn render_location_markers(markers_json: &str, center_lat: f64, center_lng: f64);

    /// Recibe el índice del marcador clicado
    #[wasm_bindgen(js_name = setMarkerClickHandler)]
    pub fn set_marker_click_handler(handler: &Closure<dyn FnMut(u32)>);

    /// -1 = ninguno
    #[wasm_bindgen(js_name = highlightMarker)]
    pub fn highlight_marker(selected_index: i32);

    #[wasm_bindgen(js_name = destroyLocationMap)]
    pub fn destroy_location_map();
}
