use super::{
    coordinates::{Axial, Cube, HexCoordinates, OffsetCoordinates},
    direction::Direction,
};
use crate::{
    config::{HexConfig, OrientationKind},
    Error,
};
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt, hash,
    ops::{Add, AddAssign, Mul, Neg, Sub},
    str::FromStr,
};

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. It is impossible to obtain a `Hex` which violates it.
///
/// A `Hex` also carries a [`HexConfig`], which only matters for converting back to offset
/// coordinates ([`Hex::row`], [`Hex::col`]). Equality, hashing, and the canonical string form
/// consider only `(q, r, s)`.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "Cube", into = "Cube")]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
    config: HexConfig,
}

impl Hex {
    /// Create a hex from cube coordinates.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Hex, Error> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(Error::InvalidCoordinate { q, r, s });
        }
        Ok(Hex {
            q,
            r,
            s,
            config: HexConfig::default(),
        })
    }

    /// Create a hex from axial coordinates; `s` is derived.
    ///
    /// # Panics
    ///
    /// If `-q - r` does not fit in an `i32`. [`Hex::from_coordinates`] reports this as an error
    /// instead.
    pub fn axial(q: i32, r: i32) -> Hex {
        let s = -i64::from(q) - i64::from(r);
        match i32::try_from(s) {
            Ok(s) => Hex {
                q,
                r,
                s,
                config: HexConfig::default(),
            },
            Err(_) => {
                let err = Error::CoordinateOverflow {
                    q: q.into(),
                    r: r.into(),
                    s,
                };
                panic!("{}", err)
            }
        }
    }

    /// Create a hex from any supported coordinate shape.
    ///
    /// `config` is retained by the hex, and determines how offset coordinates are interpreted.
    pub fn from_coordinates(
        coordinates: impl Into<HexCoordinates>,
        config: HexConfig,
    ) -> Result<Hex, Error> {
        let Cube { q, r, s } = coordinates.into().to_cube(config)?;
        Hex::new(q, r, s).map(|hex| hex.with_config(config))
    }

    /// Create a hex from offset coordinates under the given config.
    pub fn from_offset(row: i32, col: i32, config: HexConfig) -> Result<Hex, Error> {
        Hex::from_coordinates(OffsetCoordinates { row, col }, config)
    }

    #[inline]
    pub fn q(&self) -> i32 {
        self.q
    }

    #[inline]
    pub fn r(&self) -> i32 {
        self.r
    }

    #[inline]
    pub fn s(&self) -> i32 {
        self.s
    }

    #[inline]
    pub fn config(&self) -> HexConfig {
        self.config
    }

    /// This hex with a different config. The coordinates are unchanged.
    pub fn with_config(mut self, config: HexConfig) -> Hex {
        self.config = config;
        self
    }

    pub fn cube(&self) -> Cube {
        Cube {
            q: self.q,
            r: self.r,
            s: self.s,
        }
    }

    pub fn to_axial(&self) -> Axial {
        Axial {
            q: self.q,
            r: self.r,
        }
    }

    /// Column in offset coordinates, per this hex's config.
    pub fn col(&self) -> i32 {
        match self.config.orientation {
            OrientationKind::Pointy => {
                self.q + (self.r + self.config.offset.sign() * (self.r & 1)) / 2
            }
            OrientationKind::Flat => self.q,
        }
    }

    /// Row in offset coordinates, per this hex's config.
    pub fn row(&self) -> i32 {
        match self.config.orientation {
            OrientationKind::Pointy => self.r,
            OrientationKind::Flat => {
                self.r + (self.q + self.config.offset.sign() * (self.q & 1)) / 2
            }
        }
    }

    pub fn to_offset(&self) -> OffsetCoordinates {
        OffsetCoordinates {
            row: self.row(),
            col: self.col(),
        }
    }

    /// Vector sum. The result keeps this hex's config.
    pub fn add(self, vec: Hex) -> Hex {
        Hex::axial(self.q + vec.q, self.r + vec.r).with_config(self.config)
    }

    /// Vector difference. The result keeps this hex's config.
    pub fn subtract(self, vec: Hex) -> Hex {
        Hex::axial(self.q - vec.q, self.r - vec.r).with_config(self.config)
    }

    pub fn scale(self, k: i32) -> Hex {
        Hex::axial(self.q * k, self.r * k).with_config(self.config)
    }

    /// Rotate this vector 60 degrees anti-clockwise about the origin.
    pub fn rotate_left(self) -> Hex {
        Hex::axial(-self.s, -self.q).with_config(self.config)
    }

    /// Rotate this vector 60 degrees clockwise about the origin.
    pub fn rotate_right(self) -> Hex {
        Hex::axial(-self.r, -self.s).with_config(self.config)
    }

    /// The adjacent hex in direction `index`.
    ///
    /// Fails when `index` is not in `0..=5`; the message names the bounds using the compass
    /// labels of this hex's orientation.
    pub fn neighbor(self, index: usize) -> Result<Hex, Error> {
        Direction::new(index, self.config.orientation).map(|direction| self + direction)
    }

    /// All six neighbors, in direction order.
    pub fn neighbors(self) -> [Hex; 6] {
        let mut neighbors = [self; 6];
        for (neighbor, direction) in neighbors.iter_mut().zip(Direction::iter()) {
            *neighbor += direction;
        }
        neighbors
    }

    /// Distance from the origin, in hex steps.
    pub fn length(&self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Distance to another hex, in hex steps.
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }
}

impl PartialEq for Hex {
    fn eq(&self, other: &Self) -> bool {
        self.q == other.q && self.r == other.r && self.s == other.s
    }
}

impl Eq for Hex {}

impl hash::Hash for Hex {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.cube().hash(state);
    }
}

impl fmt::Debug for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hex")
            .field("q", &self.q)
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

/// The canonical form `hex(q,r,s)`.
///
/// This is stable: grids key their members by it.
impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cube().fmt(f)
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cube: Cube = s.parse()?;
        Hex::try_from(cube).map_err(Into::into)
    }
}

impl TryFrom<Cube> for Hex {
    type Error = Error;

    fn try_from(Cube { q, r, s }: Cube) -> Result<Self, Self::Error> {
        Hex::new(q, r, s)
    }
}

impl From<Hex> for Cube {
    fn from(hex: Hex) -> Self {
        hex.cube()
    }
}

impl From<Axial> for Hex {
    fn from(Axial { q, r }: Axial) -> Self {
        Hex::axial(q, r)
    }
}

impl AddAssign<Direction> for Hex {
    fn add_assign(&mut self, rhs: Direction) {
        let (dq, dr) = rhs.vector();
        *self = Hex::axial(self.q + dq, self.r + dr).with_config(self.config);
    }
}

impl Add<Direction> for Hex {
    type Output = Hex;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::add(self, rhs)
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        self.subtract(rhs)
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, k: i32) -> Hex {
        self.scale(k)
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        self.scale(-1)
    }
}

/// Parsing failed for the canonical string form of a hex
#[derive(Debug, thiserror::Error)]
pub enum ParseHexError {
    #[error("expected the form `hex(q,r,s)`")]
    Format(#[from] parse_display::ParseError),
    #[error(transparent)]
    Invalid(#[from] Error),
}
