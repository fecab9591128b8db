//! Command-line interface for the heroes server
//!
//! Flags override both the config file and the environment. The
//! environment itself is read by `Config::load`, not by clap.

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::Config;

/// Heroes API - paginated hero catalogue server
///
/// Serves the hero catalogue over HTTP with page-based listing and
/// case-insensitive name search.
#[derive(Parser, Debug, Default)]
#[command(name = "heroes-server")]
#[command(version)]
#[command(about = "Read-only hero catalogue API", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (otherwise HEROES_CONFIG, then ./heroes.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// JSON catalogue document (defaults to the built-in dataset)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Directory served under /images
    #[arg(long)]
    pub images_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply explicit flags on top of a loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(data_file) = &self.data_file {
            config.catalogue.data_file = Some(data_file.clone());
        }
        if let Some(images_dir) = &self.images_dir {
            config.http.images_dir = Some(images_dir.clone());
        }
    }
}
