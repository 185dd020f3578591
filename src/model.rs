use serde::{Deserialize, Serialize};

/// One captured broadcast: the service timestamp and the raw transcript text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtisInfo {
    pub timestamp: String,
    pub raw: String,
}

/// Payload returned by the D-ATIS service for one airport. Any of the four
/// optional fields may be absent; rendering only emits what is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtisData {
    pub airport: String,
    pub fetched_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_atis: Option<AtisInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_atis: Option<AtisInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taf: Option<String>,
}
