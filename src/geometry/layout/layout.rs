use super::orientation::Orientation;
use crate::{
    config::{GridConfig, OrientationKind},
    geometry::{FractionalHex, Hex, Point},
};

/// Maps hexes to pixel space and back.
///
/// Layouts are plain values. A [`Grid`][crate::Grid] owns one and lends it to its cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    orientation: &'static Orientation,
    size: Point,
    origin: Point,
    gutter: f64,
}

impl Layout {
    /// A layout without a gutter.
    pub fn new(orientation: OrientationKind, size: Point, origin: Point) -> Layout {
        Layout {
            orientation: orientation.orientation(),
            size,
            origin,
            gutter: 0.0,
        }
    }

    /// This layout with a rendering gutter between hexes.
    pub fn with_gutter(mut self, gutter: f64) -> Layout {
        self.gutter = gutter;
        self
    }

    #[inline]
    pub fn orientation(&self) -> &'static Orientation {
        self.orientation
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn gutter(&self) -> f64 {
        self.gutter
    }

    fn is_flat(&self) -> bool {
        self.orientation.kind() == OrientationKind::Flat
    }

    /// Pixel width of a single hex.
    pub fn hex_width(&self) -> f64 {
        if self.is_flat() {
            2.0 * self.size.x
        } else {
            3.0_f64.sqrt() * self.size.x
        }
    }

    /// Pixel height of a single hex.
    pub fn hex_height(&self) -> f64 {
        if self.is_flat() {
            3.0_f64.sqrt() * self.size.y
        } else {
            2.0 * self.size.y
        }
    }

    /// Pixel coordinates of the center of `hex`.
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let (x, y) = Orientation::apply(self.orientation.forward(), hex.q() as f64, hex.r() as f64);
        Point::new(x, y) * self.size + self.origin
    }

    /// The (generally fractional) hex containing `point`.
    ///
    /// Use [`FractionalHex::round`] to find the hex itself.
    pub fn pixel_to_hex(&self, point: Point) -> FractionalHex {
        let point = point - self.origin;
        let (q, r) = Orientation::apply(
            self.orientation.inverse(),
            point.x / self.size.x,
            point.y / self.size.y,
        );
        FractionalHex::axial(q, r)
    }

    /// Offset of corner `corner` from the center of any hex.
    ///
    /// Unless `ignore_gutter` is set, the radius shrinks by half the gutter on each axis.
    pub fn hex_corner_offset(&self, corner: usize, ignore_gutter: bool) -> Point {
        let angle = self.orientation.corner_angle(corner);
        let radius = self.radius(ignore_gutter);
        Point::new(radius.x * angle.cos(), radius.y * angle.sin())
    }

    fn radius(&self, ignore_gutter: bool) -> Point {
        if ignore_gutter {
            self.size
        } else {
            let shrink = self.gutter / 2.0;
            Point::new(self.size.x - shrink, self.size.y - shrink)
        }
    }

    /// Pixel coordinates of the six corners of `hex`.
    pub fn polygon_corners(&self, hex: Hex, ignore_gutter: bool) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        let mut corners = [center; 6];
        for (idx, corner) in corners.iter_mut().enumerate() {
            *corner += self.hex_corner_offset(idx, ignore_gutter);
        }
        corners
    }

    /// For each corner of `hex`, the two points at distance `size` from it along its edges.
    ///
    /// Renderers use these as the endpoints of a rounded corner. Each pair is
    /// `(towards previous corner, towards next corner)`.
    pub fn corner_arcs(&self, hex: Hex, size: f64, ignore_gutter: bool) -> [(Point, Point); 6] {
        let corners = self.polygon_corners(hex, ignore_gutter);
        let mut arcs = [(Point::default(), Point::default()); 6];
        for (idx, (arc, corner)) in arcs.iter_mut().zip(corners.iter()).enumerate() {
            let (left, right) = self.orientation.arc_angles(idx);
            *arc = (
                *corner + Point::new(size * left.cos(), size * left.sin()),
                *corner + Point::new(size * right.cos(), size * right.sin()),
            );
        }
        arcs
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::from(&GridConfig::default())
    }
}

impl From<&GridConfig> for Layout {
    fn from(config: &GridConfig) -> Self {
        Layout::new(config.orientation, config.size, config.origin).with_gutter(config.gutter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{:?} != {:?}", a, b);
    }

    fn pointy() -> Layout {
        Layout::new(OrientationKind::Pointy, Point::new(10.0, 10.0), Point::new(0.0, 0.0))
    }

    fn flat() -> Layout {
        Layout::new(OrientationKind::Flat, Point::new(10.0, 10.0), Point::new(0.0, 0.0))
    }

    #[test]
    fn test_hex_to_pixel() {
        let sqrt3 = 3.0_f64.sqrt();
        assert_close(pointy().hex_to_pixel(Hex::axial(1, 0)), Point::new(10.0 * sqrt3, 0.0));
        assert_close(pointy().hex_to_pixel(Hex::axial(0, 1)), Point::new(5.0 * sqrt3, 15.0));
        assert_close(flat().hex_to_pixel(Hex::axial(1, 0)), Point::new(15.0, 5.0 * sqrt3));
        assert_close(flat().hex_to_pixel(Hex::axial(0, 1)), Point::new(0.0, 10.0 * sqrt3));
    }

    #[test]
    fn test_origin_and_size() {
        let layout = Layout::new(
            OrientationKind::Pointy,
            Point::new(4.0, 6.0),
            Point::new(100.0, 50.0),
        );
        assert_close(layout.hex_to_pixel(Hex::default()), Point::new(100.0, 50.0));
        assert_close(
            layout.hex_to_pixel(Hex::axial(0, 2)),
            Point::new(100.0 + 4.0 * 3.0_f64.sqrt(), 68.0),
        );
    }

    #[test]
    fn test_pixel_round_trip() {
        let layout = Layout::new(
            OrientationKind::Flat,
            Point::new(7.0, 9.0),
            Point::new(-3.0, 12.0),
        );
        for q in -5..=5 {
            for r in -5..=5 {
                let hex = Hex::axial(q, r);
                let back = layout.pixel_to_hex(layout.hex_to_pixel(hex));
                assert!((back.q - q as f64).abs() < 1e-9);
                assert!((back.r - r as f64).abs() < 1e-9);
                assert_eq!(back.round(), hex);
            }
        }
    }

    #[test]
    fn test_pixel_to_hex_is_fractional() {
        let layout = pointy();
        let between = layout.hex_to_pixel(Hex::axial(0, 0)) + Point::new(3.0, 0.0);
        let fractional = layout.pixel_to_hex(between);
        assert!(fractional.q > 0.0 && fractional.q < 0.5);
        assert_eq!(fractional.round(), Hex::axial(0, 0));
    }

    #[test]
    fn test_polygon_corners() {
        let corners = pointy().polygon_corners(Hex::default(), false);
        let sqrt3 = 3.0_f64.sqrt();
        assert_close(corners[0], Point::new(5.0 * sqrt3, 5.0));
        assert_close(corners[1], Point::new(5.0 * sqrt3, -5.0));
        assert_close(corners[2], Point::new(0.0, -10.0));
        assert_close(corners[3], Point::new(-5.0 * sqrt3, -5.0));
        assert_close(corners[4], Point::new(-5.0 * sqrt3, 5.0));
        assert_close(corners[5], Point::new(0.0, 10.0));

        let corners = flat().polygon_corners(Hex::default(), false);
        assert_close(corners[0], Point::new(10.0, 0.0));
        assert_close(corners[3], Point::new(-10.0, 0.0));
    }

    #[test]
    fn test_neighbors_share_corners() {
        let layout = pointy();
        let here = layout.polygon_corners(Hex::default(), false);
        let east = layout.polygon_corners(Hex::axial(1, 0), false);
        // the east neighbor's west edge is our east edge
        assert_close(here[0], east[4]);
        assert_close(here[1], east[3]);
    }

    #[test]
    fn test_gutter_shrinks_only_corners() {
        let layout = pointy().with_gutter(4.0);
        let hex = Hex::axial(2, -1);
        assert_close(layout.hex_to_pixel(hex), pointy().hex_to_pixel(hex));

        let center = layout.hex_to_pixel(hex);
        let corners = layout.polygon_corners(hex, false);
        let ignored = layout.polygon_corners(hex, true);
        for (corner, ignored) in corners.iter().zip(ignored.iter()) {
            assert!((corner.distance(center) - 8.0).abs() < 1e-9);
            assert!((ignored.distance(center) - 10.0).abs() < 1e-9);
        }
        assert_eq!(ignored, pointy().polygon_corners(hex, false));
    }

    #[test]
    fn test_corner_arcs_lie_on_edges() {
        for layout in [pointy(), flat()] {
            let hex = Hex::axial(1, -2);
            let corners = layout.polygon_corners(hex, true);
            let arcs = layout.corner_arcs(hex, 2.0, true);
            for idx in 0..6 {
                let corner = corners[idx];
                let prev = corners[(idx + 5) % 6];
                let next = corners[(idx + 1) % 6];
                let (left, right) = arcs[idx];
                assert!((left.distance(corner) - 2.0).abs() < 1e-9);
                assert!((right.distance(corner) - 2.0).abs() < 1e-9);
                // edge length is 10; the arc points are 2 along it
                assert!((left.distance(prev) - 8.0).abs() < 1e-9);
                assert!((right.distance(next) - 8.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_hex_dimensions() {
        assert!((pointy().hex_width() - 10.0 * 3.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(pointy().hex_height(), 20.0);
        assert_eq!(flat().hex_width(), 20.0);
        assert!((flat().hex_height() - 10.0 * 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_from_config() {
        let config = GridConfig {
            gutter: 3.0,
            ..GridConfig::default()
        };
        let layout = Layout::from(&config);
        assert_eq!(layout.gutter(), 3.0);
        assert_eq!(layout.size(), Point::new(10.0, 10.0));
        assert_eq!(layout.orientation().kind(), OrientationKind::Pointy);
        assert_eq!(Layout::default().gutter(), 0.0);
    }
}
