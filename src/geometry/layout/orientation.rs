use crate::config::OrientationKind;
use lazy_static::lazy_static;
use std::fmt;

/// A 2x2 matrix in row-major order.
pub type Mat2 = [f64; 4];

/// The constants describing one of the two hex tilings.
///
/// Only two instances exist: [`POINTY`] and [`FLAT`]. Obtain them through
/// [`Orientation::of`] or [`OrientationKind::orientation`].
///
/// Angles are measured in sixths of a turn, so that corner `i` of a hex lies at
/// `2π · (start_angle - i) / 6`.
pub struct Orientation {
    kind: OrientationKind,
    forward: Mat2,
    inverse: Mat2,
    start_angle: f64,
    arc_left_angle: f64,
    arc_right_angle: f64,
}

lazy_static! {
    static ref SQRT_3: f64 = 3.0_f64.sqrt();

    /// Hexes with a vertex at the top.
    pub static ref POINTY: Orientation = Orientation {
        kind: OrientationKind::Pointy,
        forward: [*SQRT_3, *SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
        inverse: [*SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        start_angle: 0.5,
        arc_left_angle: 2.5,
        arc_right_angle: -1.5,
    };

    /// Hexes with an edge at the top.
    pub static ref FLAT: Orientation = Orientation {
        kind: OrientationKind::Flat,
        forward: [3.0 / 2.0, 0.0, *SQRT_3 / 2.0, *SQRT_3],
        inverse: [2.0 / 3.0, 0.0, -1.0 / 3.0, *SQRT_3 / 3.0],
        start_angle: 0.0,
        arc_left_angle: 2.0,
        arc_right_angle: -2.0,
    };
}

impl Orientation {
    pub fn of(kind: OrientationKind) -> &'static Orientation {
        match kind {
            OrientationKind::Pointy => &POINTY,
            OrientationKind::Flat => &FLAT,
        }
    }

    #[inline]
    pub fn kind(&self) -> OrientationKind {
        self.kind
    }

    /// Axial `(q, r)` to unscaled pixel offset.
    #[inline]
    pub fn forward(&self) -> &Mat2 {
        &self.forward
    }

    /// Unscaled pixel offset to axial `(q, r)`.
    #[inline]
    pub fn inverse(&self) -> &Mat2 {
        &self.inverse
    }

    /// Angle of corner 0, in sixths of a turn.
    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Radians of corner `corner`.
    pub fn corner_angle(&self, corner: usize) -> f64 {
        sixths_to_radians(self.start_angle - corner as f64)
    }

    /// Radians of the directions from corner `corner` along its two edges, `(left, right)`.
    ///
    /// "Left" points towards corner `corner - 1`, "right" towards corner `corner + 1`.
    pub fn arc_angles(&self, corner: usize) -> (f64, f64) {
        (
            sixths_to_radians(self.arc_left_angle - corner as f64),
            sixths_to_radians(self.arc_right_angle - corner as f64),
        )
    }

    /// Apply `matrix` to the column vector `(a, b)`.
    pub(crate) fn apply(matrix: &Mat2, a: f64, b: f64) -> (f64, f64) {
        (matrix[0] * a + matrix[1] * b, matrix[2] * a + matrix[3] * b)
    }
}

fn sixths_to_radians(sixths: f64) -> f64 {
    2.0 * std::f64::consts::PI * sixths / 6.0
}

impl fmt::Debug for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Orientation").field(&self.kind).finish()
    }
}

impl PartialEq for Orientation {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl OrientationKind {
    pub fn orientation(self) -> &'static Orientation {
        Orientation::of(self)
    }
}
