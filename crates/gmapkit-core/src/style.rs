//! Stroke style primitives shared between settings and rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How two stroked segments are joined at a shared vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Bevel,
    #[default]
    Round,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miter => write!(f, "miter"),
            Self::Bevel => write!(f, "bevel"),
            Self::Round => write!(f, "round"),
        }
    }
}

impl FromStr for LineJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "miter" => Ok(Self::Miter),
            "bevel" => Ok(Self::Bevel),
            "round" => Ok(Self::Round),
            _ => Err(format!("Unknown line join: {}", s)),
        }
    }
}

/// How the two open ends of a stroked polyline are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat end exactly at the end point
    #[default]
    Butt,
    /// Flat end extended by half the stroke width
    Square,
    /// Half disc centred on the end point
    Round,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Butt => write!(f, "butt"),
            Self::Square => write!(f, "square"),
            Self::Round => write!(f, "round"),
        }
    }
}

impl FromStr for LineCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "butt" | "flat" => Ok(Self::Butt),
            "square" => Ok(Self::Square),
            "round" => Ok(Self::Round),
            _ => Err(format!("Unknown line cap: {}", s)),
        }
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const MIDNIGHT_BLUE: Rgba = Rgba::new(25, 25, 112, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::MIDNIGHT_BLUE.with_alpha(144)
    }
}
