//! Testing utilities and mock implementations.
//!
//! Lets the configuration be assembled without a running Prowlarr.

mod mock_tag_source;

pub use mock_tag_source::MockTagSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::env::SecretEnv;

    /// A Prowlarr tag detail body with one record per `(label, ids)` pair.
    pub fn tag_details(tags: &[(&str, &[i64])]) -> String {
        let records: Vec<serde_json::Value> = tags
            .iter()
            .enumerate()
            .map(|(i, (label, ids))| {
                serde_json::json!({
                    "id": i + 1,
                    "label": label,
                    "delayProfileIds": [],
                    "notificationIds": [],
                    "indexerIds": ids,
                    "applicationIds": [],
                })
            })
            .collect();
        serde_json::Value::Array(records).to_string()
    }

    /// Environment with every key set to a recognisable value.
    pub fn full_env() -> SecretEnv {
        SecretEnv {
            cross_seed_api_key: Some("cross-seed-key".to_string()),
            radarr_api_key: Some("radarr-key".to_string()),
            sonarr_api_key: Some("sonarr-key".to_string()),
            prowlarr_api_key: Some("prowlarr-key".to_string()),
        }
    }
}
