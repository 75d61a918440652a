//! `.elc` save files: a JSON object with the grid size and a column-major
//! array of cells.
//!
//! ```json
//! { "xsize": 2, "ysize": 1, "elements": [[{ "Type": "Source", "Name": "A" }], [null]] }
//! ```

use std::{fs, path::Path};

use eyre::WrapErr;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{CellDescriptor, Snapshot};

pub const FILE_EXTENSION: &str = "elc";

#[derive(Serialize, Deserialize)]
struct SavedElement {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Name", default)]
    name: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct SavedGrid {
    xsize: usize,
    ysize: usize,
    /// Indexed `[x][y]`.
    elements: Vec<Vec<Option<SavedElement>>>,
}

impl From<&Snapshot> for SavedGrid {
    fn from(snapshot: &Snapshot) -> Self {
        let elements = (0..snapshot.width)
            .map(|x| {
                (0..snapshot.height)
                    .map(|y| {
                        snapshot.cell(x, y).map(|desc| SavedElement {
                            kind: desc.kind.clone(),
                            name: Some(desc.label.clone()),
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            xsize: snapshot.width,
            ysize: snapshot.height,
            elements,
        }
    }
}

impl TryFrom<SavedGrid> for Snapshot {
    type Error = Error;

    fn try_from(saved: SavedGrid) -> Result<Self> {
        if saved.elements.len() != saved.xsize {
            return Err(Error::MalformedSnapshot(format!(
                "expected {} columns, found {}",
                saved.xsize,
                saved.elements.len()
            )));
        }

        if let Some((x, column)) = saved
            .elements
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != saved.ysize)
        {
            return Err(Error::MalformedSnapshot(format!(
                "column {x} has {} cells, expected {}",
                column.len(),
                saved.ysize
            )));
        }

        let mut cells = vec![None; saved.xsize * saved.ysize];
        for (x, column) in saved.elements.into_iter().enumerate() {
            for (y, cell) in column.into_iter().enumerate() {
                cells[y * saved.xsize + x] = cell.map(|saved| CellDescriptor {
                    kind: saved.kind,
                    label: saved.name.unwrap_or_default(),
                });
            }
        }

        Snapshot::new(saved.xsize, saved.ysize, cells)
    }
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&SavedGrid::from(self))?)
    }

    /// Parses a save file. Element kinds are checked, so a successfully decoded
    /// snapshot can always be placed.
    pub fn from_json(json: &str) -> Result<Self> {
        let saved: SavedGrid = serde_json::from_str(json)?;
        Snapshot::try_from(saved)
    }
}

pub fn save_snapshot(path: impl AsRef<Path>, snapshot: &Snapshot) -> eyre::Result<()> {
    let path = path.as_ref();
    let json = snapshot.to_json()?;
    fs::write(path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    info!("saved {}x{} grid to {}", snapshot.width, snapshot.height, path.display());
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> eyre::Result<Snapshot> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let snapshot =
        Snapshot::from_json(&json).wrap_err_with(|| format!("failed to load {}", path.display()))?;
    info!("loaded {}x{} grid from {}", snapshot.width, snapshot.height, path.display());
    Ok(snapshot)
}
