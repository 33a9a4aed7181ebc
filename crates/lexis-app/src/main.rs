use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;

mod cli;
mod commands;
mod controller;
mod events;
mod logging;
mod profile;
mod render;
mod state;
mod ui;


use self::cli::Cli;
use self::controller::AppController;
use self::logging::init_tracing;
use self::profile::{ProfileSource, add_profile_from_default, init_user_config, load_user_profile};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let data_dir = cli.data_dir();
    let created_main = if cli.ephemeral {
        None
    } else {
        init_user_config(&data_dir)?
    };
    if let Some(name) = &cli.new_profile {
        let path = add_profile_from_default(&data_dir, name)?;
        println!("Created profile {name} at {}", path.display());
        return Ok(());
    }
    let (mut config, source) = load_user_profile(&data_dir, &cli.profile)
        .with_context(|| format!("Failed to load profile '{}'", cli.profile))?;
    cli.apply(&mut config);

    // Profile setup runs before the logger exists
    init_tracing(&config.log_level);
    if let Some(path) = created_main {
        tracing::info!("Created main profile at {}", path.display());
    }
    match source {
        ProfileSource::Named => {}
        ProfileSource::Main => {
            tracing::warn!("Profile {} not found, falling back to main profile", cli.profile)
        }
        ProfileSource::Defaults => {
            tracing::warn!("Profile {} not found and no main profile, using defaults", cli.profile)
        }
    }
    tracing::info!(
        profile = %cli.profile,
        mode = %config.study.mode,
        store = %config.storage.store_path().display(),
        ephemeral = config.storage.ephemeral,
        api_url = %config.dictionary.api_url,
        "loaded lexis config"
    );

    let channel_capacity = config.channel_capacity;
    let state = Arc::new(AppState::from_config(config)?);
    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl+c")?;
            tracing::info!("Ctrl+C received");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Task failed during shutdown: {e:#}"),
            Err(e) => tracing::error!("Task panicked during shutdown: {e}"),
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}
