#![allow(non_snake_case)]

mod app;
mod components;
mod export;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::pages::DOCUMENT_TITLE;

/// Jukebox Inc MLOps Architecture - document viewer
#[derive(Parser, Debug)]
#[command(name = "jukebox-mlops")]
#[command(about = "Jukebox Inc MLOps Architecture - desktop viewer and static HTML export")]
struct Args {
    /// Write the document to a standalone HTML file instead of opening a window
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    if let Some(path) = args.export {
        export::export_document(&path)?;
        println!("Exported {} to {}", DOCUMENT_TITLE, path.display());
        return Ok(());
    }

    tracing::info!(
        "Opening '{}' ({}x{})",
        DOCUMENT_TITLE,
        args.width,
        args.height
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(DOCUMENT_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_window_size() {
        let args = Args::parse_from(["jukebox-mlops"]);

        assert_eq!(args.width, 1100.0);
        assert_eq!(args.height, 900.0);
        assert!(args.export.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_parse_export_and_verbosity() {
        let args = Args::parse_from(["jukebox-mlops", "--export", "out.html", "-vv"]);

        assert_eq!(args.export, Some(PathBuf::from("out.html")));
        assert_eq!(args.verbose, 2);
    }
}
