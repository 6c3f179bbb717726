//! Error types
//!
//! The simulation itself never fails; errors only come from parsing
//! configuration at startup.

use std::fmt;

/// Failure to parse a literal value (colors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not a `#RRGGBB` hex color
    InvalidHexColor(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidHexColor(s) => write!(f, "could not parse {s:?} as #RRGGBB color"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure to load settings
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Color(ParseError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "settings i/o error: {e}"),
            ConfigError::Json(e) => write!(f, "settings json error: {e}"),
            ConfigError::Color(e) => write!(f, "settings color error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Color(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Color(e)
    }
}
