use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selección de filtro de la vista (estado UI transitorio)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub user: Option<String>,
    pub device: Option<String>,
}

impl LocationFilter {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            device: None,
        }
    }
}

/// Qué lista pide la vista al backend en cada tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationQuery {
    #[default]
    All,
    ByDate(NaiveDate),
    ByDevice(String),
}

impl LocationQuery {
    pub fn describe(&self) -> String {
        match self {
            LocationQuery::All => "historial completo".to_string(),
            LocationQuery::ByDate(date) => format!("historial del {}", date.format("%Y-%m-%d")),
            LocationQuery::ByDevice(device) => format!("historial del dispositivo {}", device),
        }
    }
}

/// Query string de `/current?user=...`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentLocationQuery {
    #[serde(default)]
    pub user: Option<String>,
}
