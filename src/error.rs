/// Failures of the coordinate core.
///
/// All of these are fatal to the call which produced them; nothing is corrected silently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The cube form of a hex did not sum to zero.
    #[error("Hex({q}, {r}, {s}) invalid: does not zero-sum")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },
    /// Deriving the cube form of a hex left the range of `i32`.
    #[error("Hex({q}, {r}, {s}) invalid: coordinate out of range")]
    CoordinateOverflow { q: i64, r: i64, s: i64 },
    /// A direction index outside `0..=5`.
    ///
    /// `first` and `last` are the compass labels of the bounds for the orientation in effect.
    #[error("Direction must be between 0 ({first}) and 5 ({last})")]
    InvalidDirection {
        direction: usize,
        first: &'static str,
        last: &'static str,
    },
    /// A pixel-space query on a cell with no layout attached.
    #[error("No layout context for converting to pixel coordinates")]
    MissingContext,
}
