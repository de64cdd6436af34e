//! Tick CLI Application
//!
//! Command-line interface for the tick checklist manager.

mod args;
mod cli;
mod handler;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handler::Cli;
use log::info;
use renderer::TerminalRenderer;
use tick_core::{TrackerBuilder, params::ListChecklists};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to open checklist store")?;

    info!("Tick started with data directory {}", tracker.data_dir().display());

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    match command {
        Some(List { command }) => cli.handle_list_command(command).await,
        Some(Item { command }) => cli.handle_item_command(command).await,
        Some(Category { command }) => cli.handle_category_command(command).await,
        Some(History { command }) => cli.handle_history_command(command).await,
        Some(Stats) => cli.statistics().await,
        Some(Targets) => cli.targets().await,
        Some(Check) => cli.check().await,
        Some(Export) => cli.export().await,
        None => cli.list_checklists(&ListChecklists::default()).await,
    }
}
