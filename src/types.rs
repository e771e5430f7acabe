//! Shared types and enums used across TILERY.
//! Includes `TileScaling`, `ImageFormat`, `TitlePlacement`, `TitleFont`,
//! and the sink/CLI `OutputEncoding`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Aggregation mode for deriving a common tile size from a heterogeneous
/// image collection.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TileScaling {
    Min,
    Max,
    Avg,
}

impl std::fmt::Display for TileScaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TileScaling::Min => "min",
            TileScaling::Max => "max",
            TileScaling::Avg => "avg",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for TileScaling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(TileScaling::Min),
            "max" => Ok(TileScaling::Max),
            "avg" => Ok(TileScaling::Avg),
            other => Err(Error::InvalidScalingMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// External image representation requested from the tiling API.
/// `Auto` takes a majority vote between forms of the input elements,
/// resolving draws in favour of the raster form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ImageFormat {
    Auto,
    Raster,
    Dynamic,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Auto => write!(f, "auto"),
            ImageFormat::Raster => write!(f, "raster"),
            ImageFormat::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Default title anchor placement when no explicit anchor is given.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TitlePlacement {
    Top,
    Bottom,
}

impl std::fmt::Display for TitlePlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitlePlacement::Top => write!(f, "top"),
            TitlePlacement::Bottom => write!(f, "bottom"),
        }
    }
}

/// Glyph lookup table used by the title renderer. `Basic` covers ASCII;
/// `Extended` also resolves Latin-1, Greek and Hiragana blocks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TitleFont {
    Basic,
    Extended,
}

impl std::fmt::Display for TitleFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleFont::Basic => write!(f, "basic"),
            TitleFont::Extended => write!(f, "extended"),
        }
    }
}

/// On-disk encoding used by the image sink for generated file names.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputEncoding {
    Png,
    Jpeg,
}

impl OutputEncoding {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputEncoding::Png => "png",
            OutputEncoding::Jpeg => "jpg",
        }
    }
}

impl std::fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
