use anyhow::{Context as _, Result};
use clap::Parser;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::content::make_comrak_options;
use crate::git::{refresh_period, MirrorManager};
use crate::server::AppState;
use crate::template::init_tera;

pub mod content;
pub mod domain;
pub mod git;
pub mod menu;
pub mod server;
pub mod template;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the server configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,
}

/// Immutable process configuration, loaded once at startup and handed to each
/// component explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Remote repository holding the documentation content.
    pub repo_url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Minutes between scheduled pulls; zero or negative disables the timer.
    #[serde(default)]
    pub update_interval_minutes: i64,
    pub port: u16,
    #[serde(default = "default_mirror_dir")]
    pub mirror_dir: PathBuf,
}

fn default_mirror_dir() -> PathBuf {
    PathBuf::from("content_repo")
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Brings the mirror up, schedules the refresh task and serves until ctrl-c.
pub async fn run(config: Config) -> Result<()> {
    let mirror = Arc::new(MirrorManager::new(&config));
    mirror.ensure_initialized().await?;

    let state = Arc::new(AppState {
        tera: init_tera()?,
        mirror_dir: mirror.dir().to_path_buf(),
        comrak_options: make_comrak_options(),
    });

    let refresh_task = refresh_period(config.update_interval_minutes).map(|period| {
        let mirror = Arc::clone(&mirror);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                mirror.refresh().await;
            }
        })
    });

    let (addr, serving) = warp::serve(server::routes(state)).try_bind_with_graceful_shutdown(
        ([0, 0, 0, 0], config.port),
        async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        },
    )?;
    info!("serving at http://{addr}");
    serving.await;

    if let Some(task) = refresh_task {
        task.abort();
    }
    Ok(())
}
