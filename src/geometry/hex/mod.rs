//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod coordinates;
pub mod direction;
pub mod fractional;

pub use coordinate::{Hex, ParseHexError};
pub use coordinates::{Axial, Cube, HexCoordinates, OffsetCoordinates, PartialCoordinates};
pub use direction::{Direction, FlatDirection, PointyDirection};
pub use fractional::{line_draw, FractionalHex};
