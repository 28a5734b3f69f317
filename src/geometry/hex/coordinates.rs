//! The coordinate shapes a [`Hex`][super::Hex] can be built from.
//!
//! Each shape is a separate variant; conversion to cube coordinates happens once, in
//! [`HexCoordinates::to_cube`], and nothing downstream looks at the shape again.

use crate::{
    config::{HexConfig, OrientationKind},
    Error,
};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Cube coordinates. Not guaranteed to be valid: `q + r + s` may be nonzero.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("hex({q},{r},{s})")]
pub struct Cube {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

/// Axial coordinates; `s` is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// Two of the three cube axes other than the axial pair; the third is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartialCoordinates {
    QS { q: i32, s: i32 },
    RS { r: i32, s: i32 },
}

/// Row and column in an offset (rectangular) layout.
///
/// Interpreting these requires an [`OffsetParity`][crate::OffsetParity] and an orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OffsetCoordinates {
    pub row: i32,
    pub col: i32,
}

/// Any of the shapes a hex can be constructed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexCoordinates {
    Cube(Cube),
    Axial(Axial),
    Partial(PartialCoordinates),
    Offset(OffsetCoordinates),
}

impl HexCoordinates {
    /// Normalize to cube coordinates.
    ///
    /// Every shape but `Cube` produces a zero-sum result by construction. The derived axes are
    /// computed without overflow; a result outside the range of `i32` is an error.
    pub fn to_cube(self, config: HexConfig) -> Result<Cube, Error> {
        match self {
            HexCoordinates::Cube(cube) => Ok(cube),
            HexCoordinates::Axial(Axial { q, r }) => narrow(q.into(), r.into()),
            HexCoordinates::Partial(PartialCoordinates::QS { q, s }) => {
                let (q, s) = (i64::from(q), i64::from(s));
                narrow(q, -q - s)
            }
            HexCoordinates::Partial(PartialCoordinates::RS { r, s }) => {
                let (r, s) = (i64::from(r), i64::from(s));
                narrow(-r - s, r)
            }
            HexCoordinates::Offset(OffsetCoordinates { row, col }) => {
                let (row, col) = (i64::from(row), i64::from(col));
                let parity = i64::from(config.offset.sign());
                let (q, r) = match config.orientation {
                    OrientationKind::Pointy => (col - (row + parity * (row & 1)) / 2, row),
                    OrientationKind::Flat => (col, row - (col + parity * (col & 1)) / 2),
                };
                narrow(q, r)
            }
        }
    }
}

/// The cube with axial `(q, r)`, if all three axes fit in an `i32`.
fn narrow(q: i64, r: i64) -> Result<Cube, Error> {
    let s = -q - r;
    match (i32::try_from(q), i32::try_from(r), i32::try_from(s)) {
        (Ok(q), Ok(r), Ok(s)) => Ok(Cube { q, r, s }),
        _ => Err(Error::CoordinateOverflow { q, r, s }),
    }
}

impl From<Cube> for HexCoordinates {
    fn from(cube: Cube) -> Self {
        HexCoordinates::Cube(cube)
    }
}

impl From<Axial> for HexCoordinates {
    fn from(axial: Axial) -> Self {
        HexCoordinates::Axial(axial)
    }
}

impl From<PartialCoordinates> for HexCoordinates {
    fn from(partial: PartialCoordinates) -> Self {
        HexCoordinates::Partial(partial)
    }
}

impl From<OffsetCoordinates> for HexCoordinates {
    fn from(offset: OffsetCoordinates) -> Self {
        HexCoordinates::Offset(offset)
    }
}

impl From<[i32; 2]> for HexCoordinates {
    fn from([q, r]: [i32; 2]) -> Self {
        HexCoordinates::Axial(Axial { q, r })
    }
}

impl From<(i32, i32)> for HexCoordinates {
    fn from((q, r): (i32, i32)) -> Self {
        HexCoordinates::Axial(Axial { q, r })
    }
}

impl From<[i32; 3]> for HexCoordinates {
    fn from([q, r, s]: [i32; 3]) -> Self {
        HexCoordinates::Cube(Cube { q, r, s })
    }
}

impl From<(i32, i32, i32)> for HexCoordinates {
    fn from((q, r, s): (i32, i32, i32)) -> Self {
        HexCoordinates::Cube(Cube { q, r, s })
    }
}
