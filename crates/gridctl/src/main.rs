//! Command-line front end for the canvas grid engine.
//!
//! Reads a page layout (a JSON array of element positions), applies one
//! editing or projection command, and writes the result as JSON to stdout.

mod cli;
mod config;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser as _;
use cli::{Cli, Command};
use config::Config;
use grid_engine::{
    CoordinateMapper, ElementPosition, GridPosition, PixelRect, add_element, commit_drag,
    find_element, get_breakpoint_position, move_element, project_layout, remove_element,
    resize_element, resolve_overlaps,
};
use log::info;
use serde::Serialize;
use std::fs::read;
use std::io::{Write as _, stdout};
use std::path::Path;

/// CSS placement of one element, as the renderer consumes it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CssBox {
    /// Element identifier.
    element_id: String,
    /// `left` value.
    left: String,
    /// `top` value.
    top: String,
    /// `width` value.
    width: String,
    /// `height` value.
    height: String,
}

/// Per-element position at a single breakpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakpointElement {
    /// Element identifier.
    element_id: String,
    /// Position at the requested breakpoint.
    #[serde(flatten)]
    position: GridPosition,
}

/// Read a layout file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
fn load_layout(path: &Path) -> Result<Vec<ElementPosition>> {
    let data = read(path).with_context(|| format!("reading layout {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing layout {}", path.display()))
}

/// Write a value as pretty JSON to stdout.
///
/// # Errors
/// Returns an error if serialization or the write fails.
fn emit<T: Serialize>(value: &T) -> Result<()> {
    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Current position of `element_id`, for flags that default to it.
///
/// # Errors
/// Returns an error if the element is not in the layout.
fn current_position(layout: &[ElementPosition], element_id: &str) -> Result<GridPosition> {
    find_element(layout, element_id)
        .map(|element| element.position)
        .ok_or_else(|| anyhow!("element '{element_id}' is not in the layout"))
}

/// Run one command against a loaded layout.
///
/// # Errors
/// Returns an error if the edit fails.
fn run(command: &Command, layout: &[ElementPosition], config: &Config) -> Result<()> {
    let constraints = &config.constraints;
    let mapper = CoordinateMapper::with_metrics(config.metrics, config.container_width);
    match command {
        Command::Place {
            id,
            width,
            height,
            strategy,
            ..
        } => emit(&add_element(layout, id, *width, *height, *strategy, constraints)?),
        Command::Move {
            id,
            row,
            col,
            width,
            height,
            ..
        } => {
            let current = current_position(layout, id)?;
            let desired = GridPosition {
                row: *row,
                col: *col,
                width: width.unwrap_or(current.width),
                height: height.unwrap_or(current.height),
            };
            emit(&move_element(layout, id, &desired, constraints)?)
        }
        Command::Resize {
            id, width, height, ..
        } => emit(&resize_element(layout, id, *width, *height, constraints)?),
        Command::Drag {
            id,
            x,
            y,
            width,
            height,
            ..
        } => {
            let current = mapper.grid_to_pixel_rect(&current_position(layout, id)?);
            let rect = PixelRect {
                x: *x,
                y: *y,
                width: width.unwrap_or(current.width),
                height: height.unwrap_or(current.height),
            };
            emit(&commit_drag(layout, id, &rect, &mapper, constraints)?)
        }
        Command::Remove { id, .. } => emit(&remove_element(layout, id)?),
        Command::Resolve { .. } => emit(&resolve_overlaps(layout, constraints)),
        Command::Responsive { breakpoint, .. } => {
            let projected = project_layout(layout);
            match breakpoint {
                Some(breakpoint) => {
                    let flattened: Vec<BreakpointElement> = projected
                        .into_iter()
                        .map(|element| BreakpointElement {
                            position: get_breakpoint_position(&element.positions, *breakpoint),
                            element_id: element.element_id,
                        })
                        .collect();
                    emit(&flattened)
                }
                None => emit(&projected),
            }
        }
        Command::Pixels { .. } => {
            let boxes: Vec<CssBox> = layout
                .iter()
                .map(|element| {
                    let rect = mapper.grid_to_pixels(&element.position);
                    CssBox {
                        element_id: element.element_id.clone(),
                        left: rect.x.to_string(),
                        top: format!("{}px", rect.y),
                        width: rect.width.to_string(),
                        height: format!("{}px", rect.height),
                    }
                })
                .collect();
            emit(&boxes)
        }
    }
}

/// Main entry point for the gridctl CLI tool.
///
/// # Errors
/// Returns an error if loading or the command fails.
fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let layout = load_layout(cli.command.layout())?;
    info!(
        "{}: {} elements from {}, container {}px",
        cli.command.name(),
        layout.len(),
        cli.command.layout().display(),
        config.container_width
    );
    run(&cli.command, &layout, &config)
}
