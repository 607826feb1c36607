//! Command-line surface of `gridctl`.

use clap::{Args, Parser, Subcommand};
use grid_engine::{Breakpoint, PlacementStrategy};
use std::path::{Path, PathBuf};

/// Edit and project canvas page layouts stored as JSON.
///
/// Every command reads a layout (a JSON array of element positions) and
/// writes its result as JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "gridctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Grid config file; falls back to `GRIDCTL_CONFIG`
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// The layout file every command operates on.
#[derive(Args, Debug, Clone)]
pub struct Layout {
    /// Layout document to read
    #[arg(value_name = "LAYOUT")]
    pub path: PathBuf,
}

/// One editing or projection command.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new element at a collision-free position
    Place {
        #[command(flatten)]
        layout: Layout,
        /// Element identifier
        #[arg(long)]
        id: String,
        /// Width in columns
        #[arg(long)]
        width: i32,
        /// Height in rows
        #[arg(long)]
        height: i32,
        /// Where to seed the search
        #[arg(long, default_value_t, value_name = "top|bottom|center|left|right|auto")]
        strategy: PlacementStrategy,
    },
    /// Move an element, resolving collisions with the rest
    Move {
        #[command(flatten)]
        layout: Layout,
        /// Element identifier
        #[arg(long)]
        id: String,
        /// Target row
        #[arg(long, allow_negative_numbers = true)]
        row: i32,
        /// Target column
        #[arg(long, allow_negative_numbers = true)]
        col: i32,
        /// New width; defaults to the current width
        #[arg(long)]
        width: Option<i32>,
        /// New height; defaults to the current height
        #[arg(long)]
        height: Option<i32>,
    },
    /// Resize an element in place
    Resize {
        #[command(flatten)]
        layout: Layout,
        /// Element identifier
        #[arg(long)]
        id: String,
        /// New width in columns
        #[arg(long)]
        width: i32,
        /// New height in rows
        #[arg(long)]
        height: i32,
    },
    /// Commit a drag given in container pixels
    Drag {
        #[command(flatten)]
        layout: Layout,
        /// Element identifier
        #[arg(long)]
        id: String,
        /// Left edge in pixels
        #[arg(long, allow_negative_numbers = true)]
        x: f32,
        /// Top edge in pixels
        #[arg(long, allow_negative_numbers = true)]
        y: f32,
        /// Width in pixels; defaults to the element's current width
        #[arg(long)]
        width: Option<f32>,
        /// Height in pixels; defaults to the element's current height
        #[arg(long)]
        height: Option<f32>,
    },
    /// Remove an element
    Remove {
        #[command(flatten)]
        layout: Layout,
        /// Element identifier
        #[arg(long)]
        id: String,
    },
    /// Re-place overlapping elements of a stored layout
    Resolve {
        #[command(flatten)]
        layout: Layout,
    },
    /// Project the layout onto mobile and tablet
    Responsive {
        #[command(flatten)]
        layout: Layout,
        /// Only emit positions for this breakpoint
        #[arg(long, value_name = "mobile|tablet|desktop")]
        breakpoint: Option<Breakpoint>,
    },
    /// Render CSS lengths for every element
    Pixels {
        #[command(flatten)]
        layout: Layout,
    },
}

impl Command {
    /// Layout file named on the command line.
    pub fn layout(&self) -> &Path {
        match self {
            Self::Place { layout, .. }
            | Self::Move { layout, .. }
            | Self::Resize { layout, .. }
            | Self::Drag { layout, .. }
            | Self::Remove { layout, .. }
            | Self::Resolve { layout }
            | Self::Responsive { layout, .. }
            | Self::Pixels { layout } => &layout.path,
        }
    }

    /// Subcommand name, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Place { .. } => "place",
            Self::Move { .. } => "move",
            Self::Resize { .. } => "resize",
            Self::Drag { .. } => "drag",
            Self::Remove { .. } => "remove",
            Self::Resolve { .. } => "resolve",
            Self::Responsive { .. } => "responsive",
            Self::Pixels { .. } => "pixels",
        }
    }
}
