//! Assembly of the configuration object cross-seed consumes.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::{Action, LinkType, MatchMode, Settings};
use crate::env::SecretEnv;
use crate::prowlarr::{fetch_indexers, IndexerFeedError, TagSource};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load indexers: {0}")]
    Indexers(#[from] IndexerFeedError),
}

/// The flat option set handed to cross-seed.
///
/// Built once at startup and never modified afterwards. Field names match
/// cross-seed's own option names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSeedConfig {
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub link_category: String,
    pub link_dirs: Vec<String>,
    pub link_type: LinkType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_dirs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_depth: Option<u32>,
    pub season_from_episodes: Option<f64>,
    pub match_mode: MatchMode,
    pub ignore_non_relevant_files_to_resume: bool,
    pub radarr: Vec<String>,
    pub skip_recheck: bool,
    pub sonarr: Vec<String>,
    pub torrent_clients: Vec<String>,
    pub torznab: Vec<String>,
    pub use_client_torrents: bool,
}

/// `<url>/?apikey=<key>`, the form cross-seed expects for Radarr and Sonarr.
fn arr_url(url: &str, api_key: Option<&str>) -> String {
    format!(
        "{}/?apikey={}",
        url.trim_end_matches('/'),
        api_key.unwrap_or_default()
    )
}

/// Build the cross-seed configuration.
///
/// Performs the single Prowlarr lookup and fails as a whole if it fails;
/// no partially filled configuration is ever returned.
pub async fn load_configuration(
    settings: &Settings,
    env: &SecretEnv,
    source: &dyn TagSource,
) -> Result<CrossSeedConfig, LoadError> {
    let torznab = fetch_indexers(
        source,
        &settings.prowlarr.url,
        env.prowlarr_api_key.as_deref().unwrap_or_default(),
        &settings.prowlarr.tag,
    )
    .await?;

    let radarr_key = env.radarr_api_key.as_deref();
    let sonarr_key = env.sonarr_api_key.as_deref();
    let cs = &settings.cross_seed;

    let config = CrossSeedConfig {
        action: cs.action,
        api_key: env.cross_seed_api_key.clone(),
        link_category: cs.link_category.clone(),
        link_dirs: cs.link_dirs.clone(),
        link_type: cs.link_type,
        data_dirs: cs.data_dirs.clone(),
        max_data_depth: cs.max_data_depth,
        season_from_episodes: cs.season_from_episodes,
        match_mode: cs.match_mode,
        ignore_non_relevant_files_to_resume: cs.ignore_non_relevant_files_to_resume,
        radarr: settings
            .radarr
            .urls
            .iter()
            .map(|u| arr_url(u, radarr_key))
            .collect(),
        skip_recheck: cs.skip_recheck,
        sonarr: settings
            .sonarr
            .urls
            .iter()
            .map(|u| arr_url(u, sonarr_key))
            .collect(),
        torrent_clients: settings.torrent_clients.clone(),
        torznab,
        use_client_torrents: cs.use_client_torrents,
    };

    info!(
        torznab = config.torznab.len(),
        radarr = config.radarr.len(),
        sonarr = config.sonarr.len(),
        "cross-seed configuration assembled"
    );

    Ok(config)
}
