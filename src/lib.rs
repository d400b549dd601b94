// ============================================================================
// LOCATION DASHBOARD - FRONTEND YEW (RUST + WASM)
// ============================================================================
// Arquitectura:
// - Components/Views: renderizado (sin lógica de datos)
// - Hooks: estado + refresco + filtros
// - ViewModels: preparación de datos para el mapa
// - Services: SOLO comunicación API + credenciales
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod hooks;
pub mod viewmodels;
pub mod components;
pub mod views;
pub mod utils;

use crate::components::App;

/// Monta la app en <body>
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Location Dashboard starting (backend: '{}')", config::CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
