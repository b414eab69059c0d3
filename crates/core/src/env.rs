//! API keys taken from the process environment.
//!
//! Nothing here is validated. A variable that is unset or empty becomes
//! `None` and is carried into the assembled configuration as-is.

pub const CROSS_SEED_API_KEY: &str = "CROSS_SEED_API_KEY";
pub const RADARR_API_KEY: &str = "RADARR_API_KEY";
pub const SONARR_API_KEY: &str = "SONARR_API_KEY";
pub const PROWLARR_API_KEY: &str = "PROWLARR_API_KEY";

/// Credentials for the services cross-seed talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretEnv {
    pub cross_seed_api_key: Option<String>,
    pub radarr_api_key: Option<String>,
    pub sonarr_api_key: Option<String>,
    pub prowlarr_api_key: Option<String>,
}

impl SecretEnv {
    /// Read the keys from the current process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the keys through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            cross_seed_api_key: read(CROSS_SEED_API_KEY),
            radarr_api_key: read(RADARR_API_KEY),
            sonarr_api_key: read(SONARR_API_KEY),
            prowlarr_api_key: read(PROWLARR_API_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let vars: HashMap<&str, &str> = [
            (CROSS_SEED_API_KEY, "cs"),
            (RADARR_API_KEY, "rd"),
            (SONARR_API_KEY, "sn"),
            (PROWLARR_API_KEY, "pw"),
        ]
        .into();

        let env = SecretEnv::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(env.cross_seed_api_key.as_deref(), Some("cs"));
        assert_eq!(env.radarr_api_key.as_deref(), Some("rd"));
        assert_eq!(env.sonarr_api_key.as_deref(), Some("sn"));
        assert_eq!(env.prowlarr_api_key.as_deref(), Some("pw"));
    }

    #[test]
    fn test_missing_and_empty_are_none() {
        let env = SecretEnv::from_lookup(|k| match k {
            RADARR_API_KEY => Some(String::new()),
            _ => None,
        });
        assert_eq!(env, SecretEnv::default());
    }
}
