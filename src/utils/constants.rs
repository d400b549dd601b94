/// Clave de localStorage con las credenciales de la sesión
pub const STORAGE_KEY_CREDENTIALS: &str = "locationDashboard_credentials";

/// Contenedor DOM del mapa (ver static/map.js)
pub const MAP_CONTAINER_ID: &str = "location-map";

/// Rutas de historial del backend
pub const HISTORY_PATH: &str = "/api/history";
pub const HISTORY_BY_DATE_PATH: &str = "/api/history/date";
pub const HISTORY_BY_DEVICE_PATH: &str = "/api/history/device";
