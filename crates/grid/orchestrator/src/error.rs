//! Errors from element-set operations.
//!
//! Only id lookups can fail; the geometry underneath is total.

use core::fmt;
use std::error::Error;

/// Result alias for element-set operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Error returned when an element id does not match the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An element with this id is already placed
    DuplicateElement(String),
    /// No element with this id is placed
    UnknownElement(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateElement(element_id) => {
                write!(formatter, "element '{element_id}' is already on the canvas")
            }
            Self::UnknownElement(element_id) => {
                write!(formatter, "element '{element_id}' is not on the canvas")
            }
        }
    }
}

impl Error for LayoutError {}
