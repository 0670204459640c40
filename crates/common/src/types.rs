use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier reported by every payload that names the service.
pub const SERVICE_NAME: &str = "kv-infosys-backend";

/// Release reported by `/health`, `/api/status` and the metrics body.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Capabilities advertised by `/api/geo/info`.
pub const GEO_FEATURES: [&str; 3] = [
    "Crisis Management",
    "Geographic Information",
    "Real-time Data",
];

const STATUS_MESSAGE: &str = "KVInfoSysBund Backend is running!";
const GEO_MESSAGE: &str = "Geo-Information System API";

/// Reported database connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    Connected,
    Disconnected,
}

impl std::fmt::Display for DatabaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseState::Connected => write!(f, "connected"),
            DatabaseState::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Payload of `GET /api/status`.
///
/// A fresh value is built for every request and discarded once serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub message: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    pub database: DatabaseState,
    pub version: String,
    pub service: String,
}

impl StatusReport {
    /// Builds the report for `environment` as of `now`.
    pub fn new(environment: impl Into<String>, database: DatabaseState, now: DateTime<Utc>) -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
            timestamp: now,
            environment: environment.into(),
            database,
            version: SERVICE_VERSION.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now,
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Payload of `GET /ready`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseState,
    pub service: String,
}

impl ReadyResponse {
    pub fn ready(database: DatabaseState, now: DateTime<Utc>) -> Self {
        Self {
            status: "ready".to_string(),
            timestamp: now,
            database,
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Payload of `GET /api/geo/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoInfo {
    pub message: String,
    pub features: Vec<String>,
    pub status: String,
}

impl Default for GeoInfo {
    fn default() -> Self {
        Self {
            message: GEO_MESSAGE.to_string(),
            features: GEO_FEATURES.iter().map(|f| (*f).to_string()).collect(),
            status: "operational".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn status_report_serializes_expected_fields() {
        let report = StatusReport::new("production", DatabaseState::Connected, fixed_instant());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["message"], "KVInfoSysBund Backend is running!");
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["environment"], "production");
        assert_eq!(json["database"], "connected");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["service"], "kv-infosys-backend");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn database_state_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&DatabaseState::Disconnected).unwrap(),
            "\"disconnected\""
        );
        assert_eq!(DatabaseState::Connected.to_string(), "connected");
    }

    #[test]
    fn health_and_ready_carry_service_identity() {
        let health = serde_json::to_value(HealthResponse::healthy(fixed_instant())).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["service"], SERVICE_NAME);
        assert_eq!(health["version"], SERVICE_VERSION);

        let ready = serde_json::to_value(ReadyResponse::ready(
            DatabaseState::Connected,
            fixed_instant(),
        ))
        .unwrap();
        assert_eq!(ready["status"], "ready");
        assert_eq!(ready["database"], "connected");
        assert!(ready.get("version").is_none());
    }

    #[test]
    fn geo_info_lists_three_features() {
        let info = GeoInfo::default();
        assert_eq!(info.features.len(), 3);
        assert_eq!(info.features[0], "Crisis Management");
        assert_eq!(info.status, "operational");
    }

    #[test]
    fn status_report_decodes_from_wire() {
        let report = StatusReport::new("development", DatabaseState::Connected, fixed_instant());
        let json = serde_json::to_string(&report).unwrap();
        let decoded: StatusReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, report);
    }
}
