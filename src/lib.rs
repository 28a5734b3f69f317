//! Hexagonal grid geometry.
//!
//! Coordinates, conversions between cube/axial/offset systems, pixel layouts, a keyed grid
//! container, and depth-first traversal over anything with neighbors.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod config;
pub mod error;
pub mod geometry;
pub mod traversal;

pub use config::{GridConfig, HexConfig, OffsetParity, OrientationKind, PartialGridConfig};
pub use error::Error;
pub use geometry::{Cell, FractionalHex, Grid, Hex, HexCoordinates, Layout, Orientation, Point};
