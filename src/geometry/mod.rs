pub mod grid;
pub mod hex;
pub mod layout;
pub mod point;

pub use grid::{Cell, CoordinateParams, Grid};
pub use hex::{Direction, FractionalHex, Hex, HexCoordinates};
pub use layout::{Layout, Orientation};
pub use point::Point;
