#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global backend base URL, set from command line
static BACKEND_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cozynest")
    })
}

/// Get the diary/mood backend base URL
pub fn get_backend_url() -> String {
    BACKEND_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

/// CozyNest - a pocket-sized comfort companion
#[derive(Parser, Debug)]
#[command(name = "cozynest-desktop")]
#[command(about = "CozyNest - affirmations, breathing exercises, music, and a diary")]
struct Args {
    /// Data directory for the session slot and the music/photo library
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the diary/mood backend
    #[arg(short, long)]
    backend_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cozynest")
    });
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(url) = args.backend_url {
        let _ = BACKEND_URL.set(url);
    }

    tracing::info!(
        "Starting CozyNest with data dir {:?}, backend {}",
        data_dir,
        get_backend_url()
    );

    // Phone-ish portrait window; the layout is a single column with a
    // bottom tab bar
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CozyNest")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
