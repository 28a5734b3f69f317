use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Which rows (pointy) or columns (flat) are shoved out by half a hex in offset coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetParity {
    #[default]
    #[serde(alias = "EVEN")]
    Even,
    #[serde(alias = "ODD")]
    Odd,
}

impl OffsetParity {
    /// `+1` for even, `-1` for odd.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            OffsetParity::Even => 1,
            OffsetParity::Odd => -1,
        }
    }
}

/// The tiling family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationKind {
    /// Hexes with a vertex at the top; rows are horizontal.
    #[default]
    #[serde(alias = "POINTY")]
    Pointy,
    /// Hexes with an edge at the top; columns are vertical.
    #[serde(alias = "FLAT")]
    Flat,
}

/// Per-hex configuration, used only to round-trip offset coordinates.
///
/// It never participates in equality or hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HexConfig {
    pub offset: OffsetParity,
    pub orientation: OrientationKind,
}

impl HexConfig {
    pub fn new(offset: OffsetParity, orientation: OrientationKind) -> Self {
        HexConfig {
            offset,
            orientation,
        }
    }
}

/// Complete configuration for a [`Grid`][crate::Grid] and its layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub offset: OffsetParity,
    pub orientation: OrientationKind,
    /// Rendering-only gap between adjacent hexes.
    pub gutter: f64,
    /// Pixel half-width and half-height of a single hex.
    pub size: Point,
    /// Pixel position of the center of `hex(0,0,0)`.
    pub origin: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            offset: OffsetParity::Even,
            orientation: OrientationKind::Pointy,
            gutter: 0.0,
            size: Point::new(10.0, 10.0),
            origin: Point::new(0.0, 0.0),
        }
    }
}

/// A [`GridConfig`] where any field may be left unset.
///
/// Unset fields always take the documented defaults of [`GridConfig::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialGridConfig {
    pub offset: Option<OffsetParity>,
    pub orientation: Option<OrientationKind>,
    pub gutter: Option<f64>,
    pub size: Option<Point>,
    pub origin: Option<Point>,
}

impl PartialGridConfig {
    pub fn offset(mut self, offset: OffsetParity) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn orientation(mut self, orientation: OrientationKind) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn size(mut self, size: Point) -> Self {
        self.size = Some(size);
        self
    }

    pub fn origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn gutter(mut self, gutter: f64) -> Self {
        self.gutter = Some(gutter);
        self
    }
}

impl From<PartialGridConfig> for GridConfig {
    fn from(partial: PartialGridConfig) -> Self {
        let defaults = GridConfig::default();
        GridConfig {
            offset: partial.offset.unwrap_or(defaults.offset),
            orientation: partial.orientation.unwrap_or(defaults.orientation),
            size: partial.size.unwrap_or(defaults.size),
            origin: partial.origin.unwrap_or(defaults.origin),
            gutter: partial.gutter.unwrap_or(defaults.gutter),
        }
    }
}

impl From<GridConfig> for PartialGridConfig {
    fn from(config: GridConfig) -> Self {
        PartialGridConfig {
            offset: Some(config.offset),
            orientation: Some(config.orientation),
            size: Some(config.size),
            origin: Some(config.origin),
            gutter: Some(config.gutter),
        }
    }
}

impl GridConfig {
    /// The part of this configuration which each member hex carries.
    pub fn hex_config(&self) -> HexConfig {
        HexConfig::new(self.offset, self.orientation)
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let partial: PartialGridConfig = toml::from_str(s)?;
        Ok(partial.into())
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = self.to_toml_string()?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
