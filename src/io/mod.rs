use crate::{
    circuits::{Element, ElementKind},
    error::{Error, Result},
};

mod format;

pub use format::{load_snapshot, save_snapshot, FILE_EXTENSION};

/// Saved form of a single element. Signals are not saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDescriptor {
    pub kind: String,
    /// Empty when the element has no label.
    pub label: String,
}

impl CellDescriptor {
    pub fn new(kind: ElementKind, label: &str) -> Self {
        Self {
            kind: kind.id().to_owned(),
            label: label.to_owned(),
        }
    }

    fn of(element: &Element) -> Self {
        Self::new(element.kind(), element.label().unwrap_or_default())
    }
}

/// Structure of a grid or grid fragment, cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    cells: Vec<Option<CellDescriptor>>,
}

impl Snapshot {
    /// Builds a snapshot from row-major `cells`. Every descriptor must name a
    /// placeable kind.
    pub fn new(width: usize, height: usize, cells: Vec<Option<CellDescriptor>>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        if width.checked_mul(height) != Some(cells.len()) {
            return Err(Error::MalformedSnapshot(format!(
                "{} cells for a {width}x{height} snapshot",
                cells.len()
            )));
        }

        let snapshot = Self { width, height, cells };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: &[Option<Element>]) -> Self {
        Self {
            width,
            height,
            cells: cells.iter().map(|cell| cell.as_ref().map(CellDescriptor::of)).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&CellDescriptor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x].as_ref()
    }

    /// Instantiates fresh elements for every cell, row-major.
    ///
    /// Fails on the first descriptor that names an unknown kind; no partial result
    /// is returned.
    pub fn to_elements(&self) -> Result<Vec<Option<Element>>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let Some(desc) = cell else {
                    return Ok(None);
                };

                let kind = ElementKind::from_id(&desc.kind).ok_or_else(|| Error::UnknownElementKind {
                    kind: desc.kind.clone(),
                    x: i % self.width,
                    y: i / self.width,
                })?;

                Element::with_label(kind, &desc.label).map(Some)
            })
            .collect()
    }

    /// Checks that every descriptor can be instantiated.
    pub fn validate(&self) -> Result<()> {
        self.to_elements().map(drop)
    }
}
