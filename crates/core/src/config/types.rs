use serde::{Deserialize, Deserializer, Serialize};

use crate::env::SecretEnv;

/// Root settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub prowlarr: ProwlarrSettings,
    #[serde(default = "default_radarr")]
    pub radarr: ArrSettings,
    #[serde(default = "default_sonarr")]
    pub sonarr: ArrSettings,
    /// Download clients in cross-seed's `<type>:<url>` notation.
    #[serde(default = "default_torrent_clients")]
    pub torrent_clients: Vec<String>,
    #[serde(default)]
    pub cross_seed: CrossSeedSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prowlarr: ProwlarrSettings::default(),
            radarr: default_radarr(),
            sonarr: default_sonarr(),
            torrent_clients: default_torrent_clients(),
            cross_seed: CrossSeedSettings::default(),
        }
    }
}

/// Prowlarr indexer discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProwlarrSettings {
    /// Prowlarr server URL (e.g., "http://localhost:9696")
    #[serde(default = "default_prowlarr_url", deserialize_with = "string_or_number")]
    pub url: String,
    /// Tag whose indexers become Torznab endpoints
    #[serde(default = "default_tag", deserialize_with = "string_or_number")]
    pub tag: String,
    /// Request timeout in seconds. Unset means the request may wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ProwlarrSettings {
    fn default() -> Self {
        Self {
            url: default_prowlarr_url(),
            tag: default_tag(),
            timeout_secs: None,
        }
    }
}

fn default_prowlarr_url() -> String {
    "http://prowlarr.media.svc.cluster.local".to_string()
}

fn default_tag() -> String {
    "cross-seed".to_string()
}

/// Accept a bare number where a string is expected.
///
/// The env provider turns `CROSSCONF_PROWLARR__TAG=2024` into an integer,
/// but an all-digit label is still a label.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        UInt(u64),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::UInt(n) => n.to_string(),
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Radarr or Sonarr instances
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArrSettings {
    #[serde(default)]
    pub urls: Vec<String>,
}

fn default_radarr() -> ArrSettings {
    ArrSettings {
        urls: vec!["http://radarr.media.svc.cluster.local".to_string()],
    }
}

fn default_sonarr() -> ArrSettings {
    ArrSettings {
        urls: vec!["http://sonarr.media.svc.cluster.local".to_string()],
    }
}

fn default_torrent_clients() -> Vec<String> {
    vec!["qbittorrent:http://qbittorrent.media.svc.cluster.local".to_string()]
}

/// Options passed through to cross-seed untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrossSeedSettings {
    #[serde(default)]
    pub action: Action,
    #[serde(default = "default_link_category", deserialize_with = "string_or_number")]
    pub link_category: String,
    #[serde(default = "default_link_dirs")]
    pub link_dirs: Vec<String>,
    #[serde(default)]
    pub link_type: LinkType,
    #[serde(default = "default_season_from_episodes")]
    pub season_from_episodes: Option<f64>,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default = "default_true")]
    pub ignore_non_relevant_files_to_resume: bool,
    #[serde(default = "default_true")]
    pub skip_recheck: bool,
    #[serde(default = "default_true")]
    pub use_client_torrents: bool,
    #[serde(default)]
    pub data_dirs: Vec<String>,
    #[serde(default)]
    pub max_data_depth: Option<u32>,
}

impl Default for CrossSeedSettings {
    fn default() -> Self {
        Self {
            action: Action::default(),
            link_category: default_link_category(),
            link_dirs: default_link_dirs(),
            link_type: LinkType::default(),
            season_from_episodes: default_season_from_episodes(),
            match_mode: MatchMode::default(),
            ignore_non_relevant_files_to_resume: true,
            skip_recheck: true,
            use_client_torrents: true,
            data_dirs: Vec::new(),
            max_data_depth: None,
        }
    }
}

fn default_link_category() -> String {
    "cross-seed".to_string()
}

fn default_link_dirs() -> Vec<String> {
    vec!["/downloads/complete/cross-seed".to_string()]
}

fn default_season_from_episodes() -> Option<f64> {
    Some(0.5)
}

fn default_true() -> bool {
    true
}

/// What cross-seed does with a match.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Inject,
    Save,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    #[default]
    Hardlink,
    Symlink,
    Reflink,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Strict,
    Flexible,
    #[default]
    Partial,
}

/// Sanitized settings for display (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSettings {
    pub prowlarr: SanitizedServiceSettings,
    pub radarr: SanitizedArrSettings,
    pub sonarr: SanitizedArrSettings,
    pub torrent_clients: Vec<String>,
    pub cross_seed: CrossSeedSettings,
    pub cross_seed_api_key_configured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedServiceSettings {
    pub url: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub api_key_configured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedArrSettings {
    pub urls: Vec<String>,
    pub api_key_configured: bool,
}

impl SanitizedSettings {
    pub fn new(settings: &Settings, env: &SecretEnv) -> Self {
        Self {
            prowlarr: SanitizedServiceSettings {
                url: settings.prowlarr.url.clone(),
                tag: settings.prowlarr.tag.clone(),
                timeout_secs: settings.prowlarr.timeout_secs,
                api_key_configured: env.prowlarr_api_key.is_some(),
            },
            radarr: SanitizedArrSettings {
                urls: settings.radarr.urls.clone(),
                api_key_configured: env.radarr_api_key.is_some(),
            },
            sonarr: SanitizedArrSettings {
                urls: settings.sonarr.urls.clone(),
                api_key_configured: env.sonarr_api_key.is_some(),
            },
            torrent_clients: settings.torrent_clients.clone(),
            cross_seed: settings.cross_seed.clone(),
            cross_seed_api_key_configured: env.cross_seed_api_key.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(
            settings.prowlarr.url,
            "http://prowlarr.media.svc.cluster.local"
        );
        assert_eq!(settings.prowlarr.tag, "cross-seed");
        assert!(settings.prowlarr.timeout_secs.is_none());
        assert_eq!(
            settings.radarr.urls,
            vec!["http://radarr.media.svc.cluster.local"]
        );
        assert_eq!(
            settings.sonarr.urls,
            vec!["http://sonarr.media.svc.cluster.local"]
        );
        assert_eq!(
            settings.torrent_clients,
            vec!["qbittorrent:http://qbittorrent.media.svc.cluster.local"]
        );
        assert_eq!(settings.cross_seed.action, Action::Inject);
        assert_eq!(settings.cross_seed.link_type, LinkType::Hardlink);
        assert_eq!(settings.cross_seed.match_mode, MatchMode::Partial);
        assert_eq!(settings.cross_seed.season_from_episodes, Some(0.5));
        assert!(settings.cross_seed.skip_recheck);
        assert!(settings.cross_seed.data_dirs.is_empty());
    }

    #[test]
    fn test_deserialize_partial_cross_seed_section() {
        let toml = r#"
[cross_seed]
action = "save"
match_mode = "strict"
link_type = "symlink"
data_dirs = ["/mnt/media/movies", "/mnt/media/tv"]
max_data_depth = 3
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.cross_seed.action, Action::Save);
        assert_eq!(settings.cross_seed.match_mode, MatchMode::Strict);
        assert_eq!(settings.cross_seed.link_type, LinkType::Symlink);
        assert_eq!(settings.cross_seed.data_dirs.len(), 2);
        assert_eq!(settings.cross_seed.max_data_depth, Some(3));
        // Untouched fields keep their defaults
        assert_eq!(settings.cross_seed.link_category, "cross-seed");
        assert!(settings.cross_seed.use_client_torrents);
    }

    #[test]
    fn test_deserialize_numeric_labels() {
        let toml = r#"
[prowlarr]
tag = 2024

[cross_seed]
link_category = 7
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.prowlarr.tag, "2024");
        assert_eq!(settings.cross_seed.link_category, "7");
    }

    #[test]
    fn test_deserialize_unknown_match_mode_fails() {
        let toml = r#"
[cross_seed]
match_mode = "fuzzy"
"#;
        let result: Result<Settings, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_sanitized_settings_hides_keys() {
        let settings = Settings::default();
        let env = SecretEnv {
            prowlarr_api_key: Some("secret".to_string()),
            ..SecretEnv::default()
        };

        let sanitized = SanitizedSettings::new(&settings, &env);
        assert!(sanitized.prowlarr.api_key_configured);
        assert!(!sanitized.radarr.api_key_configured);
        assert!(!sanitized.cross_seed_api_key_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret"));
    }
}
