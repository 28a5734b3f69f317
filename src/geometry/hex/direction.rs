use crate::{config::OrientationKind, Error};
use std::convert::TryFrom;

/// One of the six neighbor directions of a hex.
///
/// The underlying geometry is the same for both orientations: direction `0` is always the
/// axial vector `(+1, 0)`, and the rest follow clockwise. Only the compass names differ;
/// see [`PointyDirection`] and [`FlatDirection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Direction(u8);

/// Axial `(q, r)` vectors, indexed by direction.
const VECTORS: [(i32, i32); 6] = [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

impl Direction {
    pub const COUNT: usize = 6;

    /// Create a direction from its index, reporting bounds in terms of `orientation`.
    pub fn new(index: usize, orientation: OrientationKind) -> Result<Direction, Error> {
        if index < Self::COUNT {
            Ok(Direction(index as u8))
        } else {
            let (first, last) = match orientation {
                OrientationKind::Pointy => (
                    PointyDirection::East.label(),
                    PointyDirection::NorthEast.label(),
                ),
                OrientationKind::Flat => {
                    (FlatDirection::SouthEast.label(), FlatDirection::North.label())
                }
            };
            Err(Error::InvalidDirection {
                direction: index,
                first,
                last,
            })
        }
    }

    /// Iterate through all `Direction`s in index order.
    pub fn iter() -> impl Iterator<Item = Direction> {
        (0..Self::COUNT as u8).map(Direction)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The direction pointing the other way.
    #[inline]
    pub fn opposite(self) -> Direction {
        Direction((self.0 + 3) % 6)
    }

    /// Axial `(q, r)` unit vector of this direction.
    #[inline]
    pub fn vector(self) -> (i32, i32) {
        VECTORS[self.index()]
    }

    /// Compass label of this direction under the given orientation.
    pub fn label(self, orientation: OrientationKind) -> &'static str {
        match orientation {
            OrientationKind::Pointy => PointyDirection::from(self).label(),
            OrientationKind::Flat => FlatDirection::from(self).label(),
        }
    }
}

impl TryFrom<usize> for Direction {
    type Error = Error;

    /// Interpret an index under the default (pointy) labels.
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Direction::new(index, OrientationKind::Pointy)
    }
}

/// Compass names of the neighbors of a pointy-top hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display, parse_display::FromStr)]
pub enum PointyDirection {
    #[display("East")]
    East,
    #[display("South East")]
    SouthEast,
    #[display("South West")]
    SouthWest,
    #[display("West")]
    West,
    #[display("North West")]
    NorthWest,
    #[display("North East")]
    NorthEast,
}

/// Compass names of the neighbors of a flat-top hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display, parse_display::FromStr)]
pub enum FlatDirection {
    #[display("South East")]
    SouthEast,
    #[display("South")]
    South,
    #[display("South West")]
    SouthWest,
    #[display("North West")]
    NorthWest,
    #[display("North")]
    North,
    #[display("North East")]
    NorthEast,
}

impl PointyDirection {
    pub const ALL: [PointyDirection; 6] = [
        PointyDirection::East,
        PointyDirection::SouthEast,
        PointyDirection::SouthWest,
        PointyDirection::West,
        PointyDirection::NorthWest,
        PointyDirection::NorthEast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PointyDirection::East => "East",
            PointyDirection::SouthEast => "South East",
            PointyDirection::SouthWest => "South West",
            PointyDirection::West => "West",
            PointyDirection::NorthWest => "North West",
            PointyDirection::NorthEast => "North East",
        }
    }
}

impl FlatDirection {
    pub const ALL: [FlatDirection; 6] = [
        FlatDirection::SouthEast,
        FlatDirection::South,
        FlatDirection::SouthWest,
        FlatDirection::NorthWest,
        FlatDirection::North,
        FlatDirection::NorthEast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FlatDirection::SouthEast => "South East",
            FlatDirection::South => "South",
            FlatDirection::SouthWest => "South West",
            FlatDirection::NorthWest => "North West",
            FlatDirection::North => "North",
            FlatDirection::NorthEast => "North East",
        }
    }
}

impl From<PointyDirection> for Direction {
    fn from(direction: PointyDirection) -> Self {
        Direction(direction as u8)
    }
}

impl From<FlatDirection> for Direction {
    fn from(direction: FlatDirection) -> Self {
        Direction(direction as u8)
    }
}

impl From<Direction> for PointyDirection {
    fn from(direction: Direction) -> Self {
        PointyDirection::ALL[direction.index()]
    }
}

impl From<Direction> for FlatDirection {
    fn from(direction: Direction) -> Self {
        FlatDirection::ALL[direction.index()]
    }
}
