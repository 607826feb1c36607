//! Responsive projections of desktop layouts.
//!
//! Layouts are authored on desktop; mobile and tablet positions are derived
//! from them once, when the layout is saved. The projection is one-way.

mod breakpoint;
pub use breakpoint::{Breakpoint, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

mod projection;
pub use projection::{
    ResponsiveElement, ResponsivePosition, TABLET_COLUMNS, generate_responsive_positions,
    get_breakpoint_position, project_layout,
};
