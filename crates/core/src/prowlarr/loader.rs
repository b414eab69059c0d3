//! Tag lookup and Torznab endpoint construction.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::{IndexerFeedError, TagRecord, TagSource};

/// URL of Prowlarr's tag detail listing. The key is not escaped.
pub fn tag_detail_url(base_url: &str, api_key: &str) -> String {
    format!(
        "{}/api/v1/tag/detail?apikey={}",
        base_url.trim_end_matches('/'),
        api_key
    )
}

/// Torznab endpoint Prowlarr exposes for one indexer. The key is not escaped.
pub fn torznab_endpoint(base_url: &str, indexer_id: i64, api_key: &str) -> String {
    format!(
        "{}/{}/api?apikey={}",
        base_url.trim_end_matches('/'),
        indexer_id,
        api_key
    )
}

/// Pick the indexer IDs of the first record labelled exactly `tag`.
///
/// A body that is valid JSON but not an array, or that has no matching
/// record, gives an empty list. A body that is not JSON at all, or whose
/// matching record carries unusable `indexerIds`, is an error.
pub fn select_indexer_ids(body: &str, tag: &str) -> Result<Vec<i64>, IndexerFeedError> {
    let document: Value = serde_json::from_str(body)
        .map_err(|e| IndexerFeedError::Malformed(format!("invalid JSON: {}", e)))?;

    let Value::Array(records) = document else {
        warn!("Prowlarr tag details are not a JSON array, treating as empty");
        return Ok(Vec::new());
    };

    let Some(matched) = records
        .into_iter()
        .find(|r| r.get("label").and_then(Value::as_str) == Some(tag))
    else {
        debug!(tag = tag, "No Prowlarr tag with this label");
        return Ok(Vec::new());
    };

    let record: TagRecord = serde_json::from_value(matched)
        .map_err(|e| IndexerFeedError::Malformed(format!("tag '{}': {}", tag, e)))?;

    Ok(record.indexer_ids.unwrap_or_default())
}

/// Resolve the Torznab endpoints of every indexer tagged `tag`.
///
/// Makes exactly one request and preserves the order Prowlarr lists the
/// indexers in.
pub async fn fetch_indexers(
    source: &dyn TagSource,
    base_url: &str,
    api_key: &str,
    tag: &str,
) -> Result<Vec<String>, IndexerFeedError> {
    debug!(base_url = base_url, tag = tag, "Fetching Prowlarr tag details");

    let body = source
        .fetch_tag_details(&tag_detail_url(base_url, api_key))
        .await?;

    let indexers: Vec<String> = select_indexer_ids(&body, tag)?
        .into_iter()
        .map(|id| torznab_endpoint(base_url, id, api_key))
        .collect();

    info!("Loaded {} indexers from Prowlarr", indexers.len());
    Ok(indexers)
}
