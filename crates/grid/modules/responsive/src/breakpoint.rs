//! Viewport classes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Widest viewport, in CSS pixels, still treated as mobile.
pub const MOBILE_MAX_WIDTH: f32 = 767.0;

/// Widest viewport, in CSS pixels, still treated as tablet.
pub const TABLET_MAX_WIDTH: f32 = 1023.0;

/// A named viewport class with its own derived layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Phones
    Mobile,
    /// Tablets and narrow windows
    Tablet,
    /// The authoring layout
    #[default]
    Desktop,
}

impl Breakpoint {
    /// All breakpoints, narrowest first.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Classify a viewport width in CSS pixels.
    pub fn for_viewport_width(width: f32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Lowercase name used in documents and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "tablet" => Ok(Self::Tablet),
            "desktop" => Ok(Self::Desktop),
            other => Err(format!("unknown breakpoint '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test viewport classification at the boundaries.
    #[test]
    fn test_for_viewport_width() {
        assert_eq!(Breakpoint::for_viewport_width(375.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_viewport_width(767.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_viewport_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_viewport_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_viewport_width(1024.0), Breakpoint::Desktop);
    }

    /// Names parse back to the same breakpoint.
    #[test]
    fn test_parse() {
        for breakpoint in Breakpoint::ALL {
            assert_eq!(breakpoint.to_string().parse::<Breakpoint>(), Ok(breakpoint));
        }
        assert_eq!("TABLET".parse::<Breakpoint>(), Ok(Breakpoint::Tablet));
        assert_eq!("watch".parse::<Breakpoint>().ok(), None);
    }

    /// Breakpoints serialize under their lowercase names.
    #[test]
    fn test_serde_names() {
        for breakpoint in Breakpoint::ALL {
            let encoded = serde_json::to_string(&breakpoint).unwrap_or_default();
            assert_eq!(encoded, format!("\"{}\"", breakpoint.name()));
        }
        let parsed: Result<Breakpoint, _> = serde_json::from_str("\"tablet\"");
        assert_eq!(parsed.ok(), Some(Breakpoint::Tablet));
        assert_eq!(serde_json::from_str::<Breakpoint>("\"Tablet\"").ok(), None);
    }
}
