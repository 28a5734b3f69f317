use super::coordinate::Hex;
use serde::{Deserialize, Serialize};

/// Largest `|q + r + s|` accepted for fractional cube coordinates.
pub const ZERO_SUM_TOLERANCE: f64 = 1e-9;

/// Offset applied to both endpoints of a line so that no sample lands exactly on an edge.
const NUDGE: (f64, f64, f64) = (1e-6, 1e-6, -2e-6);

/// Cube coordinates which need not be integral.
///
/// These arise from pixel conversion and interpolation. Use [`FractionalHex::round`] to snap
/// to the containing [`Hex`].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    /// Create from cube coordinates, which must sum to zero within [`ZERO_SUM_TOLERANCE`].
    pub fn new(q: f64, r: f64, s: f64) -> Option<FractionalHex> {
        ((q + r + s).abs() <= ZERO_SUM_TOLERANCE).then_some(FractionalHex { q, r, s })
    }

    /// Create from axial coordinates; `s` is derived.
    pub fn axial(q: f64, r: f64) -> FractionalHex {
        FractionalHex { q, r, s: -q - r }
    }

    /// Snap to the nearest integral hex.
    ///
    /// Each axis is rounded independently, with halves going towards positive infinity; the
    /// axis which moved furthest is then recomputed from the other two. Ties go to `s`, then `r`.
    pub fn round(self) -> Hex {
        let mut q = round_half_up(self.q);
        let mut r = round_half_up(self.r);
        let s = round_half_up(self.s);

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }

        Hex::axial(q as i32, r as i32)
    }

    /// Linear interpolation towards `other`; `t == 0` is `self` and `t == 1` is `other`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        let lerp = |a: f64, b: f64| a * (1.0 - t) + b * t;
        FractionalHex::axial(lerp(self.q, other.q), lerp(self.r, other.r))
    }

    fn nudge(self) -> FractionalHex {
        FractionalHex {
            q: self.q + NUDGE.0,
            r: self.r + NUDGE.1,
            s: self.s + NUDGE.2,
        }
    }
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        FractionalHex {
            q: hex.q() as f64,
            r: hex.r() as f64,
            s: hex.s() as f64,
        }
    }
}

impl Hex {
    /// Linear interpolation towards `other`. The result is not rounded.
    pub fn lerp(self, other: Hex, t: f64) -> FractionalHex {
        FractionalHex::from(self).lerp(other.into(), t)
    }

    /// The hexes on a straight line from `self` to `other`, inclusive of both.
    ///
    /// See [`line_draw`].
    pub fn line_to(self, other: Hex) -> Vec<Hex> {
        line_draw(self, other)
    }
}

/// The `distance(a, b) + 1` hexes approximating the segment from `a` to `b`.
///
/// Both endpoints are nudged by a tiny zero-sum vector before sampling, so that samples
/// lying exactly on a hex boundary round consistently. The nudge is lost to floating point
/// precision once coordinates reach about `1e9`; endpoints remain exact regardless.
///
/// Results carry the config of `a`.
pub fn line_draw(a: Hex, b: Hex) -> Vec<Hex> {
    let n = a.distance(b);
    let a_nudge = FractionalHex::from(a).nudge();
    let b_nudge = FractionalHex::from(b).nudge();
    let step = 1.0 / n.max(1) as f64;

    (0..=n)
        .map(|i| {
            a_nudge
                .lerp(b_nudge, step * i as f64)
                .round()
                .with_config(a.config())
        })
        .collect()
}
