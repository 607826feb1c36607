//! Conversion between grid cells and pixels.
//!
//! Columns are a percentage of the container, so horizontal quantities come
//! out as mixed percentage/pixel lengths; rows have a fixed pixel height.
//! Used by the drag layer: cells to pixels for rendering drag feedback, pixels
//! back to cells while the pointer moves.

// Mixed percentage/pixel lengths
mod length;
pub use length::{CalcLength, CalcRect, PixelRect};

// Grid metrics and the mapper itself
mod mapper;
pub use mapper::{CoordinateMapper, DEFAULT_CONTAINER_WIDTH, GridMetrics};
