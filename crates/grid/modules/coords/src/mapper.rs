//! Grid-cell to pixel mapping.

use grid_geometry::{COLUMNS, GAP, GridPosition, PADDING, ROW_HEIGHT};
use serde::{Deserialize, Serialize};

use crate::length::{CalcLength, CalcRect, PixelRect};

/// Container width assumed when the host has not measured one.
pub const DEFAULT_CONTAINER_WIDTH: f32 = 1200.0;

/// Pixel metrics of the canvas grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridMetrics {
    /// Height of one row
    pub row_height: f32,
    /// Gap between adjacent cells
    pub gap: f32,
    /// Padding on the container edge
    pub padding: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            gap: GAP,
            padding: PADDING,
        }
    }
}

/// Maps between grid cells and container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    /// Grid metrics
    pub metrics: GridMetrics,
    /// Measured container width in pixels, used for pixel-to-cell conversion
    pub container_width: f32,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_WIDTH)
    }
}

impl CoordinateMapper {
    /// Mapper with default metrics for a container `container_width` pixels wide.
    pub fn new(container_width: f32) -> Self {
        Self::with_metrics(GridMetrics::default(), container_width)
    }

    /// Mapper with custom metrics.
    pub const fn with_metrics(metrics: GridMetrics, container_width: f32) -> Self {
        Self {
            metrics,
            container_width,
        }
    }

    /// Width of one column: `(100% - 2 * padding) / 12`.
    pub fn column_width(&self) -> CalcLength {
        let columns = COLUMNS as f32;
        CalcLength::new(100.0 / columns, -2.0 * self.metrics.padding / columns)
    }

    /// Distance between the left edges of adjacent columns, in pixels.
    fn column_pitch(&self) -> f32 {
        self.column_width().resolve(self.container_width) + self.metrics.gap
    }

    /// Distance between the top edges of adjacent rows, in pixels.
    fn row_pitch(&self) -> f32 {
        self.metrics.row_height + self.metrics.gap
    }

    /// Map a grid rectangle into the container.
    ///
    /// - `x = padding + col * column_width + col * gap`
    /// - `y = padding + row * row_height + row * gap`
    /// - `width = width * column_width + (width - 1) * gap`
    /// - `height = height * row_height + (height - 1) * gap`
    pub fn grid_to_pixels(&self, position: &GridPosition) -> CalcRect {
        let GridMetrics {
            row_height,
            gap,
            padding,
        } = self.metrics;
        let column_width = self.column_width();
        let col = position.col as f32;
        let row = position.row as f32;
        let width = position.width as f32;
        let height = position.height as f32;

        CalcRect {
            x: CalcLength::px(padding) + column_width * col + CalcLength::px(col * gap),
            y: padding + row * row_height + row * gap,
            width: column_width * width + CalcLength::px((width - 1.0) * gap),
            height: height * row_height + (height - 1.0) * gap,
        }
    }

    /// Map a grid rectangle to concrete pixels in this mapper's container.
    pub fn grid_to_pixel_rect(&self, position: &GridPosition) -> PixelRect {
        self.grid_to_pixels(position).resolve(self.container_width)
    }

    /// Map a pixel rectangle back to the nearest grid cells.
    ///
    /// Inverse of [`Self::grid_to_pixels`] with rounding. Exact for rectangles
    /// produced from grid positions; otherwise the nearest cell wins. The
    /// result is not clamped to the grid.
    pub fn pixels_to_grid(&self, rect: &PixelRect) -> GridPosition {
        let padding = self.metrics.padding;
        let gap = self.metrics.gap;
        let column_pitch = self.column_pitch().max(f32::EPSILON);
        let row_pitch = self.row_pitch().max(f32::EPSILON);

        GridPosition {
            row: ((rect.y - padding) / row_pitch).round() as i32,
            col: ((rect.x - padding) / column_pitch).round() as i32,
            width: ((rect.width + gap) / column_pitch).round() as i32,
            height: ((rect.height + gap) / row_pitch).round() as i32,
        }
    }
}
