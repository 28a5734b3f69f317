use crate::{
    config::HexConfig,
    geometry::{Hex, Layout, Point},
    Error,
};
use std::{
    fmt,
    rc::{Rc, Weak},
};

/// A hex together with a payload and, optionally, the layout which places it in pixel space.
///
/// The layout reference is weak: a cell never keeps its layout alive. Pixel-space queries
/// fail with [`Error::MissingContext`] when no layout is attached or the layout has gone.
///
/// The hex itself is immutable; to move a cell, build a new one with [`Cell::with_hex`].
#[derive(Clone)]
pub struct Cell<P = ()> {
    hex: Hex,
    context: Weak<Layout>,
    pub payload: P,
}

impl<P> Cell<P> {
    /// A detached cell.
    pub fn new(hex: Hex, payload: P) -> Cell<P> {
        Cell {
            hex,
            context: Weak::new(),
            payload,
        }
    }

    #[inline]
    pub fn hex(&self) -> Hex {
        self.hex
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Attach this cell to a layout.
    pub fn attach(mut self, layout: &Rc<Layout>) -> Cell<P> {
        self.context = Rc::downgrade(layout);
        self
    }

    /// The attached layout, if any is still alive.
    pub fn context(&self) -> Option<Rc<Layout>> {
        self.context.upgrade()
    }

    pub fn is_attached(&self) -> bool {
        self.context.strong_count() > 0
    }

    /// A cell at a different position, keeping payload and context.
    pub fn with_hex(self, hex: Hex) -> Cell<P> {
        Cell { hex, ..self }
    }

    /// A cell with a different payload, keeping position and context.
    pub fn with_payload<Q>(self, payload: Q) -> Cell<Q> {
        Cell {
            hex: self.hex,
            context: self.context,
            payload,
        }
    }

    pub(crate) fn with_hex_config(mut self, config: HexConfig) -> Cell<P> {
        self.hex = self.hex.with_config(config);
        self
    }

    fn layout(&self) -> Result<Rc<Layout>, Error> {
        self.context().ok_or(Error::MissingContext)
    }

    /// Pixel coordinates of the center of this cell.
    pub fn to_point(&self) -> Result<Point, Error> {
        Ok(self.layout()?.hex_to_pixel(self.hex))
    }

    /// Pixel coordinates of the corners of this cell.
    pub fn to_corners(&self, ignore_gutter: bool) -> Result<[Point; 6], Error> {
        Ok(self.layout()?.polygon_corners(self.hex, ignore_gutter))
    }

    /// Endpoints of rounded corners of radius `size`; see [`Layout::corner_arcs`].
    pub fn arc_corners(
        &self,
        size: f64,
        ignore_gutter: bool,
    ) -> Result<[(Point, Point); 6], Error> {
        Ok(self.layout()?.corner_arcs(self.hex, size, ignore_gutter))
    }
}

impl<P: Default> From<Hex> for Cell<P> {
    fn from(hex: Hex) -> Self {
        Cell::new(hex, P::default())
    }
}

impl Hex {
    /// A unit cell at this position, placed by `layout`.
    pub fn attach(self, layout: &Rc<Layout>) -> Cell {
        Cell::from(self).attach(layout)
    }
}

impl<P: fmt::Debug> fmt::Debug for Cell<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("hex", &self.hex)
            .field("attached", &self.is_attached())
            .field("payload", &self.payload)
            .finish()
    }
}

/// Displays as the canonical form of its hex.
impl<P> fmt::Display for Cell<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.hex.fmt(f)
    }
}
