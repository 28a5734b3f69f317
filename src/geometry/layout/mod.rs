//! Mapping hexes to and from pixel space.

// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod layout;
mod orientation;

pub use layout::Layout;
pub use orientation::{Orientation, FLAT, POINTY};
