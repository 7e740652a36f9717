//! Daytrip CLI Application
//!
//! Command-line interface for assembling, scheduling, and quoting guided
//! day-tour itineraries.

mod args;
mod cli;
mod renderer;
mod route_file;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use daytrip_core::OperatorBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let operator = OperatorBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize operator")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Daytrip started");

    match command {
        Some(Course { command }) => {
            Cli::new(operator, renderer)
                .handle_course_command(command)
                .await
        }
        Some(Vehicle { command }) => {
            Cli::new(operator, renderer)
                .handle_vehicle_command(command)
                .await
        }
        Some(Itinerary { command }) => {
            Cli::new(operator, renderer)
                .handle_itinerary_command(command)
                .await
        }
        Some(Template { command }) => {
            Cli::new(operator, renderer)
                .handle_template_command(command)
                .await
        }
        None => Cli::new(operator, renderer).list_itineraries().await,
    }
}
