use log::debug;

use crate::{
    circuits::{Element, ElementKind},
    error::Result,
};

use super::Grid;

/// Tool selected in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tool {
    Place(ElementKind),
    Interact,
    Eraser,
    /// Sets the label of the clicked element to the given text.
    TextLabeler(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolOutcome {
    Placed,
    Erased,
    Activated,
    Labeled,
    Nothing,
}

impl Grid {
    /// Applies `tool` to the cell at `(x, y)`.
    ///
    /// Occupied cells are never replaced by placement: clicking them with any tool
    /// other than the eraser or labeler activates the element instead.
    pub fn apply_tool(&mut self, tool: &Tool, x: usize, y: usize) -> Result<ToolOutcome> {
        let occupied = self.element_at(x, y)?.is_some();

        let outcome = match (tool, occupied) {
            (Tool::Eraser, _) => {
                self.set_element(None, x, y)?;
                ToolOutcome::Erased
            }
            (Tool::TextLabeler(text), true) => {
                self.set_label(x, y, text)?;
                ToolOutcome::Labeled
            }
            (_, true) => {
                self.activate(x, y)?;
                ToolOutcome::Activated
            }
            (Tool::Place(kind), false) => {
                self.set_element(Some(Element::new(*kind)), x, y)?;
                ToolOutcome::Placed
            }
            (Tool::Interact | Tool::TextLabeler(_), false) => ToolOutcome::Nothing,
        };

        debug!("{tool:?} at ({x}, {y}): {outcome:?}");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{circuits::GateKind, error::Error};

    #[test]
    fn place_then_click_toggles_source() {
        let mut grid = Grid::new(4, 4).unwrap();
        let tool = Tool::Place(ElementKind::Source);

        assert_eq!(grid.apply_tool(&tool, 1, 2).unwrap(), ToolOutcome::Placed);
        assert!(!grid.signal_at(1, 2).unwrap());

        assert_eq!(grid.apply_tool(&tool, 1, 2).unwrap(), ToolOutcome::Activated);
        assert!(grid.signal_at(1, 2).unwrap());
        assert_eq!(
            grid.element_at(1, 2).unwrap().map(Element::kind),
            Some(ElementKind::Source)
        );
    }

    #[test]
    fn click_only_touches_clicked_cell() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.apply_tool(&Tool::Place(ElementKind::Source), 0, 0).unwrap();
        grid.apply_tool(&Tool::Place(ElementKind::Source), 1, 0).unwrap();

        grid.apply_tool(&Tool::Interact, 0, 0).unwrap();
        assert!(grid.signal_at(0, 0).unwrap());
        assert!(!grid.signal_at(1, 0).unwrap());
    }

    #[test]
    fn eraser_clears_cell() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.apply_tool(&Tool::Place(ElementKind::Gate(GateKind::Or)), 0, 1).unwrap();

        assert_eq!(grid.apply_tool(&Tool::Eraser, 0, 1).unwrap(), ToolOutcome::Erased);
        assert!(grid.is_empty());
        assert_eq!(grid.apply_tool(&Tool::Eraser, 0, 1).unwrap(), ToolOutcome::Erased);
    }

    #[test]
    fn labeler_sets_label_or_reports() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.apply_tool(&Tool::Place(ElementKind::Output), 0, 0).unwrap();
        grid.apply_tool(&Tool::Place(ElementKind::Wire), 1, 0).unwrap();

        let labeler = Tool::TextLabeler("Q".into());
        assert_eq!(grid.apply_tool(&labeler, 0, 0).unwrap(), ToolOutcome::Labeled);
        assert_eq!(grid.element_at(0, 0).unwrap().and_then(Element::label), Some("Q"));

        assert!(matches!(
            grid.apply_tool(&labeler, 1, 0),
            Err(Error::LabelingNotSupported { kind: "Wire" })
        ));
        assert_eq!(grid.apply_tool(&labeler, 1, 1).unwrap(), ToolOutcome::Nothing);
    }

    #[test]
    fn out_of_bounds_tool_is_rejected() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            grid.apply_tool(&Tool::Place(ElementKind::Wire), 2, 0),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(grid.is_empty());
    }
}
