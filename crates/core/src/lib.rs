pub mod config;
pub mod crossseed;
pub mod env;
pub mod prowlarr;
pub mod render;
pub mod testing;

pub use config::{
    load_settings, load_settings_from_env, load_settings_from_str, Action, ConfigError, LinkType,
    MatchMode, SanitizedSettings, Settings,
};
pub use crossseed::{load_configuration, CrossSeedConfig, LoadError};
pub use env::SecretEnv;
pub use prowlarr::{fetch_indexers, IndexerFeedError, ProwlarrClient, TagSource};
pub use render::{render, OutputFormat, RenderError};
