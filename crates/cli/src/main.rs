mod cli;

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crossconf_core::{
    load_configuration, load_settings, load_settings_from_env, render, ProwlarrClient,
    SanitizedSettings, SecretEnv, Settings,
};

use cli::{Cli, Command, RenderArgs};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr, stdout carries the rendered configuration
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    let settings = read_settings(cli.config.as_deref())?;
    let env = SecretEnv::from_process();

    match cli.command {
        Some(Command::Settings) => {
            let sanitized = SanitizedSettings::new(&settings, &env);
            println!("{}", serde_json::to_string_pretty(&sanitized)?);
            Ok(())
        }
        Some(Command::Render(args)) => render_config(&settings, &env, args).await,
        None => render_config(&settings, &env, RenderArgs::default()).await,
    }
}

fn read_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            info!("Loading settings from {:?}", path);
            load_settings(path).with_context(|| format!("Failed to load settings from {:?}", path))
        }
        None => {
            info!("No settings file given, using built-in defaults");
            load_settings_from_env().context("Failed to load settings from environment")
        }
    }
}

async fn render_config(settings: &Settings, env: &SecretEnv, args: RenderArgs) -> Result<()> {
    let client =
        ProwlarrClient::from_settings(&settings.prowlarr).context("Failed to create Prowlarr client")?;

    info!(
        "Discovering indexers tagged '{}' at {}",
        settings.prowlarr.tag, settings.prowlarr.url
    );
    let config = load_configuration(settings, env, &client)
        .await
        .context("Failed to load cross-seed configuration")?;

    let rendered = render(&config, args.format)?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            info!("Wrote cross-seed configuration to {:?}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
