#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use valentine_core::{Link, ShowConfig};

/// Show config, set once from the command line
static SHOW_CONFIG: OnceLock<ShowConfig> = OnceLock::new();

/// Directory the registry paths are relative to
static ASSET_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Get the show config (set from command line or default)
pub fn get_show_config() -> ShowConfig {
    SHOW_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the asset root directory
pub fn get_asset_root() -> PathBuf {
    ASSET_ROOT
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Valentine - a five-screen interactive greeting
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "Valentine - unlock a question, then photos, GIFs and a song")]
struct Args {
    /// Show config file (JSON). Defaults to <config dir>/valentine/show.json if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory asset paths are relative to (default: current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Override the accepted unlock answer
    #[arg(short, long)]
    answer: Option<String>,

    /// Add a "continue" link between screens, e.g. --link 3:4 (repeatable)
    #[arg(short, long = "link", value_name = "FROM:TO")]
    links: Vec<Link>,

    /// Window width
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("valentine").join("show.json"))
        .filter(|path| path.is_file())
}

fn load_config(args: &Args) -> anyhow::Result<ShowConfig> {
    let path = args.config.clone().or_else(default_config_path);
    let mut config = match path {
        Some(path) => ShowConfig::from_json_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ShowConfig::default(),
    };

    if let Some(answer) = &args.answer {
        config.answer = answer.trim().to_string();
    }
    for link in &args.links {
        config.navigation.add_link(*link);
    }
    config.validate()?;
    Ok(config)
}

fn resolve_root(root: Option<&Path>) -> anyhow::Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    root.canonicalize()
        .with_context(|| format!("asset root {} is not accessible", root.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let root = resolve_root(args.root.as_deref())?;

    // The webview resolves relative asset URLs against the working directory.
    std::env::set_current_dir(&root)?;

    tracing::info!(
        root = %root.display(),
        links = config.navigation.links.len(),
        "Starting valentine"
    );

    let _ = SHOW_CONFIG.set(config);
    let _ = ASSET_ROOT.set(root);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Valentine 💖")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
