use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Settings, ConfigError};

/// Prefix for environment overrides, e.g. `CROSSCONF_PROWLARR__TAG`.
const ENV_PREFIX: &str = "CROSSCONF_";

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

/// Load settings from file with environment variable overrides
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load settings from built-in defaults and environment variables only
pub fn load_settings_from_env() -> Result<Settings, ConfigError> {
    Figment::new()
        .merge(env_provider())
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load settings from TOML string (useful for testing)
pub fn load_settings_from_str(toml_str: &str) -> Result<Settings, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_settings_from_str_valid() {
        let toml = r#"
[prowlarr]
url = "http://localhost:9696"
tag = "seeding"
"#;
        let settings = load_settings_from_str(toml).unwrap();
        assert_eq!(settings.prowlarr.url, "http://localhost:9696");
        assert_eq!(settings.prowlarr.tag, "seeding");
    }

    #[test]
    fn test_load_settings_from_str_bad_type() {
        let toml = r#"
[prowlarr]
timeout_secs = "soon"
"#;
        let result = load_settings_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_settings_file_not_found() {
        let result = load_settings(Path::new("/nonexistent/crossconf.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
torrent_clients = ["qbittorrent:http://127.0.0.1:8080"]

[prowlarr]
url = "http://127.0.0.1:9696"
timeout_secs = 10

[radarr]
urls = ["http://radarr-4k", "http://radarr-hd"]
"#
        )
        .unwrap();

        let settings = load_settings(temp_file.path()).unwrap();
        assert_eq!(settings.prowlarr.url, "http://127.0.0.1:9696");
        assert_eq!(settings.prowlarr.timeout_secs, Some(10));
        assert_eq!(settings.radarr.urls.len(), 2);
        assert_eq!(
            settings.sonarr.urls,
            vec!["http://sonarr.media.svc.cluster.local"]
        );
        assert_eq!(
            settings.torrent_clients,
            vec!["qbittorrent:http://127.0.0.1:8080"]
        );
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "crossconf.toml",
                r#"
[prowlarr]
tag = "from-file"
"#,
            )?;
            jail.set_env("CROSSCONF_PROWLARR__TAG", "from-env");
            jail.set_env("CROSSCONF_CROSS_SEED__SKIP_RECHECK", "false");

            let settings = load_settings(Path::new("crossconf.toml"))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(settings.prowlarr.tag, "from-env");
            assert!(!settings.cross_seed.skip_recheck);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_tag_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CROSSCONF_PROWLARR__TAG", "2024");
            jail.set_env("CROSSCONF_CROSS_SEED__LINK_CATEGORY", "42");

            let settings =
                load_settings_from_env().map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(settings.prowlarr.tag, "2024");
            assert_eq!(settings.cross_seed.link_category, "42");
            Ok(())
        });
    }

    #[test]
    fn test_load_settings_from_env_defaults() {
        figment::Jail::expect_with(|_jail| {
            let settings =
                load_settings_from_env().map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(settings.prowlarr.tag, "cross-seed");
            Ok(())
        });
    }
}
