// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use serde::Serialize;
use crate::config::MapConfig;
use crate::models::Location;
use crate::utils::map_ffi::*;

/// Estructura para enviar al mapa (JSON para static/map.js)
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MapMarker {
    /// Posición en la lista; es lo que devuelve el click
    pub index: usize,
    pub label: String,
    pub coords: [f64; 2], // [lat, lng]
    pub popup: String,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    pub fn prefers_dark_mode() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    pub fn initialize_map(container_id: &str, config: &MapConfig) {
        let is_dark = Self::prefers_dark_mode();
        log::info!("🗺️ Inicializando mapa (dark mode: {})", is_dark);
        init_location_map(
            container_id,
            is_dark,
            config.default_center_lat,
            config.default_center_lng,
            config.default_zoom,
        );
    }

    /// Un marcador por registro, sin agrupar
    pub fn prepare_markers(locations: &[Location]) -> Vec<MapMarker> {
        locations
            .iter()
            .enumerate()
            .map(|(index, loc)| MapMarker {
                index,
                label: loc.tracker_label().to_string(),
                coords: [loc.latitude, loc.longitude],
                popup: format!(
                    "{} · {} · {}",
                    loc.tracker_label(),
                    loc.device_label(),
                    loc.formatted_timestamp()
                ),
            })
            .collect()
    }

    /// Centro = último elemento recibido (no el timestamp máximo)
    pub fn center(locations: &[Location], config: &MapConfig) -> (f64, f64) {
        locations
            .last()
            .map(Location::coordinates)
            .unwrap_or((config.default_center_lat, config.default_center_lng))
    }

    pub fn update_map_markers(locations: &[Location], config: &MapConfig) {
        let markers = Self::prepare_markers(locations);
        let (lat, lng) = Self::center(locations, config);

        match serde_json::to_string(&markers) {
            Ok(json) => {
                log::debug!("🗺️ {} marcadores, centro [{}, {}]", markers.len(), lat, lng);
                render_location_markers(&json, lat, lng);
            }
            Err(e) => log::error!("❌ Error serializando marcadores: {}", e),
        }
    }

    /// Posición del registro seleccionado en la lista actual.
    /// El índice del click no sobrevive a un refresco (el backend antepone
    /// los pings nuevos), así que se busca el registro; si ya no está, None.
    pub fn selected_index(locations: &[Location], selected: Option<&Location>) -> Option<usize> {
        selected.and_then(|record| locations.iter().position(|loc| loc == record))
    }

    pub fn highlight(selected: Option<usize>) {
        highlight_marker(selected.map(|i| i as i32).unwrap_or(-1));
    }
}
