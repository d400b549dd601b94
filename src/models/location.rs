use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Un ping de ubicación tal como lo devuelve `/api/history*`.
///
/// Inmutable una vez recibido: la identidad es la posición en la lista,
/// no `id` (que el backend puede omitir).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: Option<i64>,
    /// Identificador del usuario (tracker) que emitió el ping
    #[serde(default)]
    pub tracker_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub battery: Option<i32>,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub server_received_at: Option<String>,
}

impl Location {
    /// Coordenadas como tupla (lat, lng)
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn tracker_label(&self) -> &str {
        self.tracker_id.as_deref().unwrap_or("?")
    }

    pub fn device_label(&self) -> &str {
        self.device_id.as_deref().unwrap_or("-")
    }

    /// Conexión OwnTracks: "w" = wifi, "m" = datos móviles, "o" = offline
    pub fn connection_label(&self) -> Option<&str> {
        self.connection.as_deref().map(|c| match c {
            "w" => "WiFi",
            "m" => "Mobile",
            "o" => "Offline",
            other => other,
        })
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Acepta ISO-8601 sin zona (lo que serializa el backend) o RFC 3339 con
/// offset, normalizado a UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// Envoltorio común de las tres rutas de historial
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryResponse {
    pub data: Vec<Location>,
    /// Solo `/api/history`
    #[serde(default)]
    pub total: Option<u64>,
    /// `/api/history/date` y `/api/history/device/{id}`
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
}

impl HistoryResponse {
    /// Metadatos del sobre para los logs; no se muestran en la UI
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} ubicaciones", self.data.len())];
        if let Some(total) = self.total {
            parts.push(format!("total={}", total));
        }
        if let Some(count) = self.count {
            parts.push(format!("count={}", count));
        }
        if let Some(date) = &self.date {
            parts.push(format!("date={}", date));
        }
        if let Some(device_id) = &self.device_id {
            parts.push(format!("device_id={}", device_id));
        }
        parts.join(", ")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_history_envelope() {
        let body = r#"{
            "total": 2,
            "data": [
                {"id": 1, "latitude": 52.1, "longitude": 4.3, "timestamp": "2024-05-01T10:15:00",
                 "device_id": "phone", "tracker_id": "al", "battery": 81, "connection": "w",
                 "altitude": null, "accuracy": 12.0, "user_id": "alice",
                 "server_received_at": "2024-05-01T10:15:02.123456", "raw_data": "{}"},
                {"latitude": 52.2, "longitude": 4.4, "timestamp": "2024-05-01T10:20:00Z"}
            ]
        }"#;

        let response: HistoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total, Some(2));
        assert_eq!(response.data.len(), 2);

        let first = &response.data[0];
        assert_eq!(first.tracker_label(), "al");
        assert_eq!(first.device_label(), "phone");
        assert_eq!(first.connection_label(), Some("WiFi"));
        assert_eq!(first.formatted_timestamp(), "2024-05-01 10:15:00");

        let second = &response.data[1];
        assert_eq!(second.tracker_id, None);
        assert_eq!(second.tracker_label(), "?");
        assert_eq!(second.formatted_timestamp(), "2024-05-01 10:20:00");
    }

    #[test]
    fn summary_includes_date_and_device_envelope_fields() {
        let by_date: HistoryResponse =
            serde_json::from_str(r#"{"date": "2024-05-01", "count": 0, "data": []}"#).unwrap();
        assert_eq!(by_date.summary(), "0 ubicaciones, count=0, date=2024-05-01");

        let by_device: HistoryResponse =
            serde_json::from_str(r#"{"device_id": "phone", "count": 3, "data": []}"#).unwrap();
        assert!(by_device.summary().ends_with("count=3, device_id=phone"));
    }

    #[test]
    fn offsets_are_normalised_to_utc() {
        let ts = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(ts, parse_timestamp("2024-05-01T10:00:00").unwrap());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let body = r#"{"data": [{"latitude": 1.0, "longitude": 2.0, "timestamp": "yesterday"}]}"#;
        assert!(serde_json::from_str::<HistoryResponse>(body).is_err());
    }
}
