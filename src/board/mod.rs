use log::{debug, warn};

use crate::{
    circuits::Element,
    error::{Error, Result},
    io::Snapshot,
};

mod tool;
mod update;

pub use tool::{Tool, ToolOutcome};

pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_HEIGHT: usize = 64;
/// Upper bound on `width * height`.
pub const MAX_CELLS: usize = 1 << 24;

/// Rectangular board of cells. Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Element>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![None; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|len| (1..=MAX_CELLS).contains(len))
            .ok_or(Error::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn pos(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Replaces the cell contents, returning the previous occupant.
    pub fn set_element(&mut self, element: Option<Element>, x: usize, y: usize) -> Result<Option<Element>> {
        let index = self.index(x, y)?;
        Ok(std::mem::replace(&mut self.cells[index], element))
    }

    pub fn element_at(&self, x: usize, y: usize) -> Result<Option<&Element>> {
        let index = self.index(x, y)?;
        Ok(self.cells[index].as_ref())
    }

    pub fn element_at_mut(&mut self, x: usize, y: usize) -> Result<Option<&mut Element>> {
        let index = self.index(x, y)?;
        Ok(self.cells[index].as_mut())
    }

    /// Signal of the cell, LOW for empty cells.
    pub fn signal_at(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.element_at(x, y)?.is_some_and(Element::signal))
    }

    pub fn occupied(&self) -> impl Iterator<Item = ((usize, usize), &Element)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|e| (self.pos(i), e)))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        debug!("cleared {}x{} grid", self.width, self.height);
    }

    /// Interacts with the element at the cell, empty cells are ignored.
    pub fn activate(&mut self, x: usize, y: usize) -> Result<()> {
        if let Some(element) = self.element_at_mut(x, y)? {
            element.activate();
        }
        Ok(())
    }

    pub fn set_label(&mut self, x: usize, y: usize, text: &str) -> Result<()> {
        match self.element_at_mut(x, y)? {
            Some(element) => element
                .set_label(text)
                .inspect_err(|err| warn!("label at ({x}, {y}) rejected: {err}")),
            None => Ok(()),
        }
    }

    /// New grid with the given size. Cells in the overlap keep their coordinates.
    pub fn resize(&self, width: usize, height: usize) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                grid.cells[y * width + x] = self.cells[y * self.width + x].clone();
            }
        }
        debug!("resized grid {}x{} -> {width}x{height}", self.width, self.height);
        Ok(grid)
    }

    /// Smallest grid holding every occupied cell, moved to the origin.
    ///
    /// A grid without elements shrinks to 1x1.
    pub fn shrink(&self) -> Grid {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for ((x, y), _) in self.occupied() {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        let (x0, y0, x1, y1) = bounds.unwrap_or((0, 0, 0, 0));
        let grid = Grid {
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
            cells: (y0..=y1)
                .flat_map(|y| (x0..=x1).map(move |x| (x, y)))
                .map(|(x, y)| self.cells[y * self.width + x].clone())
                .collect(),
        };
        debug!("shrunk grid {}x{} -> {}x{}", self.width, self.height, grid.width, grid.height);
        grid
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot::from_cells(self.width, self.height, &self.cells)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Grid> {
        let mut grid = Grid::new(snapshot.width(), snapshot.height())?;
        grid.cells = snapshot.to_elements()?;
        Ok(grid)
    }

    /// Stamps `snapshot` onto the grid with its top-left cell at `(ox, oy)`.
    ///
    /// The grid grows to fit the fragment. Every fragment cell overwrites the
    /// live cell, empty ones included. Nothing changes if the snapshot is invalid.
    pub fn place_fragment(&mut self, snapshot: &Snapshot, ox: usize, oy: usize) -> Result<()> {
        let elements = snapshot.to_elements().inspect_err(|err| warn!("fragment rejected: {err}"))?;

        let (Some(right), Some(bottom)) = (
            ox.checked_add(snapshot.width()),
            oy.checked_add(snapshot.height()),
        ) else {
            return Err(Error::OutOfBounds {
                x: ox,
                y: oy,
                width: self.width,
                height: self.height,
            });
        };

        let width = self.width.max(right);
        let height = self.height.max(bottom);
        if width != self.width || height != self.height {
            *self = self.resize(width, height)?;
        }

        for (i, element) in elements.into_iter().enumerate() {
            let x = ox + i % snapshot.width();
            let y = oy + i / snapshot.width();
            self.set_element(element, x, y)?;
        }

        debug!(
            "placed {}x{} fragment at ({ox}, {oy})",
            snapshot.width(),
            snapshot.height()
        );
        Ok(())
    }
}
