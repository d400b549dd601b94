// ============================================================================
// API ERROR - Fallos de red / auth / parseo al pedir ubicaciones
// ============================================================================
// La UI no distingue entre variantes: solo muestra user_message().
// Las variantes existen para los logs.
// ============================================================================

use thiserror::Error;

const GENERIC_MESSAGE: &str = "No se pudieron cargar las ubicaciones";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudieron cargar las ubicaciones (network error: {0})")]
    Network(String),

    #[error("No se pudieron cargar las ubicaciones (HTTP {0})")]
    Status(u16),

    #[error("No se pudieron cargar las ubicaciones (parse error: {0})")]
    Parse(String),
}

impl ApiError {
    /// Mensaje mostrado en el banner; idéntico para cualquier causa
    pub fn user_message(&self) -> String {
        format!("{}. Reintentando en el próximo refresco...", GENERIC_MESSAGE)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_collapses_to_the_same_user_message() {
        let errors = [
            ApiError::Network("connection refused".into()),
            ApiError::Status(401),
            ApiError::Parse("missing field `data`".into()),
        ];
        let first = errors[0].user_message();
        assert!(errors.iter().all(|e| e.user_message() == first));
    }

    #[test]
    fn display_keeps_the_cause_for_logs() {
        assert!(ApiError::Status(503).to_string().contains("HTTP 503"));
        assert!(ApiError::Network("timeout".into()).to_string().starts_with(GENERIC_MESSAGE));
    }
}
