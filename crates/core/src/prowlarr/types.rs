use serde::Deserialize;

/// One element of Prowlarr's tag detail listing.
///
/// Only the fields used for endpoint discovery are kept; the rest of the
/// record (delay profiles, notifications, applications, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub indexer_ids: Option<Vec<i64>>,
}
