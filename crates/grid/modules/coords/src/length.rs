//! Lengths made of a percentage of the container plus a pixel offset.

use core::fmt;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// `percent% + px`, the shape of a CSS `calc()` length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalcLength {
    /// Percentage of the container width
    pub percent: f32,
    /// Fixed pixel offset
    pub px: f32,
}

impl CalcLength {
    /// Create a new length.
    pub const fn new(percent: f32, px: f32) -> Self {
        Self { percent, px }
    }

    /// A plain pixel length.
    pub const fn px(px: f32) -> Self {
        Self { percent: 0.0, px }
    }

    /// A plain percentage.
    pub const fn percent(percent: f32) -> Self {
        Self { percent, px: 0.0 }
    }

    /// Resolve against a container `container_width` pixels wide.
    pub fn resolve(self, container_width: f32) -> f32 {
        self.percent / 100.0 * container_width + self.px
    }
}

impl Add for CalcLength {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            percent: self.percent + rhs.percent,
            px: self.px + rhs.px,
        }
    }
}

impl Mul<f32> for CalcLength {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self {
            percent: self.percent * rhs,
            px: self.px * rhs,
        }
    }
}

impl fmt::Display for CalcLength {
    /// Formats as a CSS length: `24px`, `50%`, or `calc(50% - 8px)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.percent.abs() < f32::EPSILON {
            return write!(formatter, "{}px", self.px);
        }
        if self.px.abs() < f32::EPSILON {
            return write!(formatter, "{}%", self.percent);
        }
        let sign = if self.px < 0.0 { '-' } else { '+' };
        write!(
            formatter,
            "calc({}% {sign} {}px)",
            self.percent,
            self.px.abs()
        )
    }
}

/// Grid rectangle mapped into container space, horizontal axis unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalcRect {
    /// Left edge
    pub x: CalcLength,
    /// Top edge in pixels
    pub y: f32,
    /// Width
    pub width: CalcLength,
    /// Height in pixels
    pub height: f32,
}

impl CalcRect {
    /// Resolve the horizontal axis against a concrete container width.
    pub fn resolve(&self, container_width: f32) -> PixelRect {
        PixelRect {
            x: self.x.resolve(container_width),
            y: self.y,
            width: self.width.resolve(container_width),
            height: self.height,
        }
    }
}

/// Rectangle in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl PixelRect {
    /// Create a new pixel rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
