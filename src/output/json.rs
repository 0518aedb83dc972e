//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope for JSON output: the payload plus metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::posting;

    #[test]
    fn test_envelope_carries_version() {
        let output = JsonOutput::new(vec!["a"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_postings_keep_wire_field_names() {
        let result = format_json(&[posting("j1", "Engineer")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["data"][0]["_id"], "j1");
        assert_eq!(value["data"][0]["jobType"], "Full-time");
        assert_eq!(value["data"][0]["salary"], 90000);
        assert!(value["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_empty_list() {
        let jobs: Vec<String> = vec![];
        assert!(format_json(&jobs).unwrap().contains("\"data\": []"));
    }
}
