use super::cell::Cell;
use crate::{
    config::{GridConfig, OrientationKind, PartialGridConfig},
    geometry::{FractionalHex, Hex, HexCoordinates, Layout, Point},
    Error,
};
use indexmap::IndexMap;
use itertools::{Itertools, MinMaxResult};
use std::{fmt, rc::Rc};
use tracing::{debug, trace};

/// A Grid keeps track of a set of hex cells sharing one layout.
///
/// Cells are keyed by the canonical identity of their hex (`hex(q,r,s)`), so there is at
/// most one cell per position. Iteration follows insertion order; overwriting a position
/// keeps its first place in that order.
///
/// ## Entry Points
///
/// - [`Grid::new`] for an empty grid with some configuration.
/// - [`Grid::with_cells`] / [`Grid::from_hexes`] when the hexes already exist.
/// - [`Grid::from_coordinates`] / [`Grid::from_coordinate_params`] to build hexes from raw
///   coordinates.
///
/// Every cell inserted into a grid has its hex config overwritten to match the grid's, and
/// is attached to the grid's layout.
#[derive(Clone)]
pub struct Grid<P = ()> {
    cells: IndexMap<Hex, Cell<P>>,
    config: GridConfig,
    layout: Rc<Layout>,
}

/// Structured input for [`Grid::from_coordinate_params`].
pub struct CoordinateParams<'a, I, P> {
    /// Consumed exactly once.
    pub coords: I,
    /// Produces the payload for each hex; [`Default`] when unset.
    pub cell_constructor: Option<Box<dyn 'a + FnMut(Hex) -> P>>,
    /// Merged over the defaults.
    pub config: Option<PartialGridConfig>,
}

impl<'a, I, P> CoordinateParams<'a, I, P> {
    pub fn new(coords: I) -> Self {
        CoordinateParams {
            coords,
            cell_constructor: None,
            config: None,
        }
    }

    pub fn cell_constructor(mut self, constructor: impl 'a + FnMut(Hex) -> P) -> Self {
        self.cell_constructor = Some(Box::new(constructor));
        self
    }

    pub fn config(mut self, config: impl Into<PartialGridConfig>) -> Self {
        self.config = Some(config.into());
        self
    }
}

impl<P> Grid<P> {
    /// An empty grid.
    pub fn new(config: impl Into<GridConfig>) -> Grid<P> {
        let config = config.into();
        Grid {
            cells: IndexMap::new(),
            layout: Rc::new(Layout::from(&config)),
            config,
        }
    }

    /// A grid containing `cells`.
    ///
    /// Later cells replace earlier ones at the same position.
    pub fn with_cells(
        cells: impl IntoIterator<Item = Cell<P>>,
        config: impl Into<GridConfig>,
    ) -> Grid<P> {
        let mut grid = Grid::new(config);
        grid.extend(cells);
        debug!(
            cells = grid.len(),
            orientation = ?grid.config.orientation,
            "built grid"
        );
        grid
    }

    /// Build one hex per coordinate and a payload for each.
    ///
    /// Offset coordinates are interpreted with the grid's parity and orientation.
    pub fn from_coordinate_params<'a, I>(
        params: CoordinateParams<'a, I, P>,
    ) -> Result<Grid<P>, Error>
    where
        I: IntoIterator,
        I::Item: Into<HexCoordinates>,
        P: Default,
    {
        let CoordinateParams {
            coords,
            mut cell_constructor,
            config,
        } = params;
        let config = GridConfig::from(config.unwrap_or_default());
        let hex_config = config.hex_config();

        let cells = coords
            .into_iter()
            .map(|coordinates| {
                let hex = Hex::from_coordinates(coordinates, hex_config)?;
                let payload = match &mut cell_constructor {
                    Some(construct) => construct(hex),
                    None => P::default(),
                };
                Ok(Cell::new(hex, payload))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Grid::with_cells(cells, config))
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// A shared handle to this grid's layout, for attaching cells built outside the grid.
    pub fn context(&self) -> Rc<Layout> {
        Rc::clone(&self.layout)
    }

    fn is_flat(&self) -> bool {
        self.config.orientation == OrientationKind::Flat
    }

    /// Number of cells in this grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Insert a cell, replacing and returning any cell already at its position.
    pub fn set(&mut self, cell: Cell<P>) -> Option<Cell<P>> {
        let cell = cell
            .with_hex_config(self.config.hex_config())
            .attach(&self.layout);
        let replaced = self.cells.insert(cell.hex(), cell);
        if let Some(replaced) = &replaced {
            trace!(hex = %replaced, "replaced cell");
        }
        replaced
    }

    /// Insert a hex with a default payload, replacing any cell already at its position.
    pub fn set_hex(&mut self, hex: Hex) -> Option<Cell<P>>
    where
        P: Default,
    {
        self.set(hex.into())
    }

    pub fn get(&self, hex: &Hex) -> Option<&Cell<P>> {
        self.cells.get(hex)
    }

    /// Mutable access to the payload at `hex`. To move or replace a cell, use [`Grid::set`].
    pub fn get_mut(&mut self, hex: &Hex) -> Option<&mut P> {
        self.cells.get_mut(hex).map(|cell| &mut cell.payload)
    }

    pub fn has(&self, hex: &Hex) -> bool {
        self.cells.contains_key(hex)
    }

    /// Iterate over the cells of this grid in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell<P>> {
        self.cells.values()
    }

    /// Iterate over the positions of this grid with mutable access to their payloads.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Hex, &mut P)> {
        self.cells
            .iter_mut()
            .map(|(hex, cell)| (*hex, &mut cell.payload))
    }

    /// Iterate over the positions of this grid in insertion order.
    pub fn hexes(&self) -> impl '_ + Iterator<Item = Hex> {
        self.cells.keys().copied()
    }

    pub fn for_each(&self, visit: impl FnMut(&Cell<P>)) {
        self.iter().for_each(visit)
    }

    /// A new grid with the same configuration, holding the cells for which `predicate` holds.
    pub fn filter(&self, mut predicate: impl FnMut(&Cell<P>) -> bool) -> Grid<P>
    where
        P: Clone,
    {
        Grid::with_cells(
            self.iter().filter(|cell| predicate(cell)).cloned(),
            self.config,
        )
    }

    /// A new grid with the same configuration, holding the cells produced by `f`.
    ///
    /// Cells are re-keyed by their new positions. If two results collide, the one produced
    /// later wins.
    pub fn map<Q>(&self, f: impl FnMut(&Cell<P>) -> Cell<Q>) -> Grid<Q> {
        Grid::with_cells(self.iter().map(f), self.config)
    }

    /// Materialize the cells in iteration order.
    pub fn to_vec(&self) -> Vec<Cell<P>>
    where
        P: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Pixel width of a single hex.
    pub fn hex_width(&self) -> f64 {
        self.layout.hex_width()
    }

    /// Pixel height of a single hex.
    pub fn hex_height(&self) -> f64 {
        self.layout.hex_height()
    }

    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        self.layout.hex_to_pixel(hex)
    }

    pub fn pixel_to_hex(&self, point: Point) -> FractionalHex {
        self.layout.pixel_to_hex(point)
    }

    /// Pixel width of this grid: the horizontal span between its outermost cells, plus one hex.
    ///
    /// `0` for an empty grid.
    pub fn width(&self) -> f64 {
        let extremes = if self.is_flat() {
            self.hexes().minmax_by_key(|hex| hex.q())
        } else {
            self.hexes()
                .minmax_by(|a, b| b.s().cmp(&a.s()).then_with(|| a.q().cmp(&b.q())))
        };
        self.span(extremes, |point| point.x, self.hex_width())
    }

    /// Pixel height of this grid: the vertical span between its outermost cells, plus one hex.
    ///
    /// `0` for an empty grid.
    pub fn height(&self) -> f64 {
        let extremes = if self.is_flat() {
            self.hexes()
                .minmax_by(|a, b| b.s().cmp(&a.s()).then_with(|| a.r().cmp(&b.r())))
        } else {
            self.hexes().minmax_by_key(|hex| hex.r())
        };
        self.span(extremes, |point| point.y, self.hex_height())
    }

    fn span(&self, extremes: MinMaxResult<Hex>, axis: impl Fn(Point) -> f64, extent: f64) -> f64 {
        match extremes {
            MinMaxResult::NoElements => 0.0,
            MinMaxResult::OneElement(_) => extent,
            MinMaxResult::MinMax(low, high) => {
                axis(self.hex_to_pixel(high)) - axis(self.hex_to_pixel(low)) + extent
            }
        }
    }
}

impl<P: Default> Grid<P> {
    /// A grid of default-payload cells at `hexes`.
    pub fn from_hexes(
        hexes: impl IntoIterator<Item = Hex>,
        config: impl Into<GridConfig>,
    ) -> Grid<P> {
        Grid::with_cells(hexes.into_iter().map(Cell::from), config)
    }

    /// A grid with the default configuration and one default-payload cell per coordinate.
    ///
    /// `coords` is consumed exactly once.
    pub fn from_coordinates<I>(coords: I) -> Result<Grid<P>, Error>
    where
        I: IntoIterator,
        I::Item: Into<HexCoordinates>,
    {
        Self::from_coordinate_params(CoordinateParams::new(coords))
    }
}

impl<P> Default for Grid<P> {
    fn default() -> Self {
        Grid::new(GridConfig::default())
    }
}

impl<P> Extend<Cell<P>> for Grid<P> {
    fn extend<T: IntoIterator<Item = Cell<P>>>(&mut self, iter: T) {
        for cell in iter {
            self.set(cell);
        }
    }
}

impl<P> FromIterator<Cell<P>> for Grid<P> {
    fn from_iter<T: IntoIterator<Item = Cell<P>>>(iter: T) -> Self {
        Grid::with_cells(iter, GridConfig::default())
    }
}

impl<P> IntoIterator for Grid<P> {
    type Item = Cell<P>;
    type IntoIter = indexmap::map::IntoValues<Hex, Cell<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_values()
    }
}

impl<'a, P> IntoIterator for &'a Grid<P> {
    type Item = &'a Cell<P>;
    type IntoIter = indexmap::map::Values<'a, Hex, Cell<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.values()
    }
}

impl<P> fmt::Debug for Grid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("config", &self.config)
            .field("cells", &format_args!("[...; {}]", self.cells.len()))
            .finish()
    }
}

impl<P> fmt::Display for Grid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HexConfig, OffsetParity};
    use crate::geometry::hex::OffsetCoordinates;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_empty() {
        let grid = Grid::<()>::default();
        assert_eq!(grid.len(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0.0);
        assert_eq!(grid.height(), 0.0);
        assert_eq!(*grid.config(), GridConfig::default());
        assert_eq!(grid.to_string(), "Grid(0)");
    }

    #[test]
    fn test_with_hexes() {
        let grid: Grid =
            Grid::from_hexes(vec![Hex::axial(0, 0), Hex::axial(0, 1)], GridConfig::default());
        assert_eq!(grid.len(), 2);
        assert!(grid.has(&Hex::axial(0, 1)));
        assert!(!grid.has(&Hex::axial(1, 1)));
    }

    #[test]
    fn test_config_is_overwritten() {
        let odd = HexConfig::new(OffsetParity::Odd, OrientationKind::Pointy);
        let hex1 = Hex::axial(0, 0).with_config(odd);
        let hex2 = Hex::axial(0, 1);
        let config = PartialGridConfig::default().offset(OffsetParity::Odd);
        let grid: Grid = Grid::from_hexes(vec![hex1, hex2], config);
        for cell in &grid {
            assert_eq!(cell.hex().config().offset, OffsetParity::Odd);
            assert!(cell.is_attached());
        }
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut grid: Grid<&str> = Grid::default();
        assert!(grid.set(Cell::new(Hex::axial(0, 0), "a")).is_none());
        grid.set(Cell::new(Hex::axial(1, 0), "b"));
        let replaced = grid.set(Cell::new(Hex::axial(0, 0), "c"));
        assert_eq!(replaced.map(Cell::into_payload), Some("a"));
        assert_eq!(grid.len(), 2);
        let payloads: Vec<_> = grid.iter().map(|cell| cell.payload).collect();
        assert_eq!(payloads, vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut_payload() {
        let mut grid: Grid<u32> = Grid::from_hexes(vec![Hex::axial(2, 2)], GridConfig::default());
        *grid.get_mut(&Hex::axial(2, 2)).unwrap() += 5;
        assert_eq!(grid.get(&Hex::axial(2, 2)).unwrap().payload, 5);
        assert!(grid.get_mut(&Hex::axial(0, 0)).is_none());
    }

    #[test]
    fn test_payload_mutation_keeps_cells_keyed() {
        let mut grid: Grid<u32> =
            Grid::from_hexes(vec![Hex::axial(0, 0), Hex::axial(1, 0)], GridConfig::default());
        for (hex, payload) in grid.iter_mut() {
            *payload = hex.q() as u32 + 10;
        }
        *grid.get_mut(&Hex::axial(0, 0)).unwrap() *= 2;

        for (hex, cell) in grid.hexes().zip(grid.iter()) {
            assert_eq!(cell.hex(), hex);
            assert!(cell.is_attached());
        }
        let payloads: Vec<_> = grid.iter().map(|cell| cell.payload).collect();
        assert_eq!(payloads, vec![20, 11]);
    }

    #[test]
    fn test_filter_and_map() {
        let grid: Grid<i32> = Grid::from_coordinate_params(
            CoordinateParams::new((0..6).map(|q| [q, 0])).cell_constructor(|hex| hex.q() * 10),
        )
        .unwrap();
        let even = grid.filter(|cell| cell.payload % 20 == 0);
        assert_eq!(
            even.hexes().collect::<Vec<_>>(),
            vec![Hex::axial(0, 0), Hex::axial(2, 0), Hex::axial(4, 0)]
        );
        assert_eq!(even.config(), grid.config());

        let shifted = grid.map(|cell| {
            let hex = cell.hex();
            cell.clone().with_hex(hex + Hex::axial(0, 1)).with_payload(hex.q() as f64)
        });
        assert_eq!(shifted.len(), 6);
        assert!(shifted.has(&Hex::axial(5, 1)));
        assert_eq!(shifted.get(&Hex::axial(3, 1)).unwrap().payload, 3.0);
    }

    #[test]
    fn test_map_collisions_last_write_wins() {
        let grid: Grid<i32> = Grid::from_coordinate_params(
            CoordinateParams::new(vec![[0, 0], [1, 0], [2, 0]]).cell_constructor(|hex| hex.q()),
        )
        .unwrap();
        let collapsed = grid.map(|cell| cell.clone().with_hex(Hex::default()));
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed.get(&Hex::default()).unwrap().payload, 2);
    }

    #[test]
    fn test_from_coordinates_consumes_once() {
        let mut remaining = vec![[1, 2], [0, 1], [0, 0]];
        let generator = std::iter::from_fn(move || remaining.pop());
        let grid: Grid = Grid::from_coordinates(generator).unwrap();
        assert_eq!(
            grid.hexes().collect::<Vec<_>>(),
            vec![Hex::axial(0, 0), Hex::axial(0, 1), Hex::axial(1, 2)]
        );
    }

    #[test]
    fn test_from_coordinates_rejects_invalid() {
        let result = Grid::<()>::from_coordinates(vec![
            HexCoordinates::from([0, 0, 0]),
            HexCoordinates::from([1, 1, 1]),
        ]);
        assert_eq!(result.unwrap_err(), Error::InvalidCoordinate { q: 1, r: 1, s: 1 });
    }

    #[test]
    fn test_offset_coordinates_use_grid_config() {
        let config = PartialGridConfig::default()
            .offset(OffsetParity::Odd)
            .orientation(OrientationKind::Flat);
        let grid: Grid = Grid::from_coordinate_params(
            CoordinateParams::new(vec![OffsetCoordinates { row: 1, col: 1 }]).config(config),
        )
        .unwrap();
        let cell = grid.iter().next().unwrap();
        assert_eq!(cell.hex(), Hex::axial(1, 1));
        assert_eq!((cell.hex().row(), cell.hex().col()), (1, 1));
    }

    #[test]
    fn test_width_two_adjacent_pointy() {
        let grid: Grid =
            Grid::from_hexes(vec![Hex::axial(0, 0), Hex::axial(1, 0)], GridConfig::default());
        let (f, size) = (grid.layout().orientation().forward(), grid.config().size);
        let hex_width = f[0] * size.x;
        assert_close(grid.hex_width(), hex_width);
        assert_close(grid.width(), 2.0 * hex_width);
        assert_close(grid.height(), grid.hex_height());
    }

    #[test]
    fn test_dimensions_flat() {
        let config = PartialGridConfig::default().orientation(OrientationKind::Flat);
        let hexes = vec![Hex::axial(0, 0), Hex::axial(1, 0), Hex::axial(0, 1)];
        let grid: Grid = Grid::from_hexes(hexes, config);
        // centers at x = 0, 15, 0; y = 0, 5√3, 10√3
        assert_close(grid.width(), 15.0 + 20.0);
        assert_close(grid.height(), 10.0 * 3.0_f64.sqrt() + grid.hex_height());
    }

    #[test]
    fn test_single_cell_dimensions() {
        let grid: Grid = Grid::from_hexes(vec![Hex::axial(4, -2)], GridConfig::default());
        assert_close(grid.width(), grid.hex_width());
        assert_close(grid.height(), grid.hex_height());
    }

    #[test]
    fn test_cells_share_grid_layout() {
        let config = PartialGridConfig::default().origin(Point::new(50.0, 50.0));
        let grid: Grid = Grid::from_hexes(vec![Hex::axial(1, 0)], config);
        let cell = grid.get(&Hex::axial(1, 0)).unwrap();
        assert_eq!(cell.to_point().unwrap(), grid.hex_to_pixel(Hex::axial(1, 0)));
        assert_eq!(grid.pixel_to_hex(cell.to_point().unwrap()).round(), Hex::axial(1, 0));
        let cell = cell.clone();
        drop(grid);
        assert!(cell.to_point().is_err());
    }

    #[test]
    fn test_into_iter_and_collect() {
        let grid: Grid = (0..4).map(|r| Cell::from(Hex::axial(0, r))).collect();
        let cells: Vec<_> = grid.into_iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[3].hex(), Hex::axial(0, 3));
    }
}
