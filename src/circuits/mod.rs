use crate::{
    direction::Direction4Array,
    error::{Error, Result},
};

pub mod gates;

pub use gates::GateKind;

/// Kind of a placeable element.
///
/// Tool selectors such as the eraser are not kinds, see [`crate::board::Tool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Wire,
    Source,
    Output,
    Gate(GateKind),
}

impl ElementKind {
    /// Name used by the save format.
    pub fn id(self) -> &'static str {
        match self {
            ElementKind::Wire => "Wire",
            ElementKind::Source => "Source",
            ElementKind::Output => "Output",
            ElementKind::Gate(gate) => gate.id(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "Wire" => Some(ElementKind::Wire),
            "Source" => Some(ElementKind::Source),
            "Output" => Some(ElementKind::Output),
            _ => GateKind::from_id(id).map(ElementKind::Gate),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ElementKind::Wire => "Wire",
            ElementKind::Source => "Switch",
            ElementKind::Output => "Lamp",
            ElementKind::Gate(gate) => gate.display_name(),
        }
    }

    pub fn all() -> impl Iterator<Item = ElementKind> {
        [ElementKind::Wire, ElementKind::Source, ElementKind::Output]
            .into_iter()
            .chain(GateKind::ALL.iter().copied().map(ElementKind::Gate))
    }

    /// Sides this kind reads signals from.
    pub fn inputs(self) -> Direction4Array<bool> {
        match self {
            ElementKind::Wire | ElementKind::Output => Direction4Array::ALL,
            ElementKind::Source => Direction4Array::NONE,
            ElementKind::Gate(gate) => gate.inputs(),
        }
    }

    /// Sides this kind drives its signal into.
    pub fn outputs(self) -> Direction4Array<bool> {
        match self {
            ElementKind::Wire | ElementKind::Source => Direction4Array::ALL,
            ElementKind::Output => Direction4Array::NONE,
            ElementKind::Gate(gate) => gate.outputs(),
        }
    }

    pub fn supports_labeling(self) -> bool {
        matches!(self, ElementKind::Source | ElementKind::Output)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    signal: bool,
    label: Option<String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            signal: false,
            label: None,
        }
    }

    pub fn wire() -> Self {
        Self::new(ElementKind::Wire)
    }

    pub fn source(signal: bool) -> Self {
        Self {
            signal,
            ..Self::new(ElementKind::Source)
        }
    }

    pub fn output() -> Self {
        Self::new(ElementKind::Output)
    }

    pub fn gate(gate: GateKind) -> Self {
        Self::new(ElementKind::Gate(gate))
    }

    /// Fresh element with a label taken from a save file. Empty labels are dropped,
    /// labels on kinds without label support are rejected.
    pub fn with_label(kind: ElementKind, label: &str) -> Result<Self> {
        let mut element = Self::new(kind);
        element.set_label(label)?;
        Ok(element)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn signal(&self) -> bool {
        self.signal
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn supports_labeling(&self) -> bool {
        self.kind.supports_labeling()
    }

    pub fn set_label(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            self.label = None;
            return Ok(());
        }

        if !self.supports_labeling() {
            return Err(Error::LabelingNotSupported {
                kind: self.kind.id(),
            });
        }

        self.label = Some(text.to_owned());
        Ok(())
    }

    /// Direct interaction with the element. Only touches this element.
    pub fn activate(&mut self) {
        if let ElementKind::Source = self.kind {
            self.signal = !self.signal;
        }
    }

    /// Computes the next signal from the signals on the connected input sides.
    ///
    /// `inputs` yields `None` for sides without a connection. Wires are resolved
    /// per net by the grid and never reach this.
    pub fn compute_next(&self, inputs: impl IntoIterator<Item = Option<bool>>) -> bool {
        match self.kind {
            ElementKind::Wire | ElementKind::Source => self.signal,
            ElementKind::Output => {
                let mut connected = false;
                let mut any_high = false;
                for input in inputs.into_iter().flatten() {
                    connected = true;
                    any_high |= input;
                }
                if connected {
                    any_high
                } else {
                    self.signal
                }
            }
            ElementKind::Gate(gate) => gate.evaluate(inputs.into_iter().map(|i| i.unwrap_or(false))),
        }
    }

    pub(crate) fn commit(&mut self, signal: bool) {
        self.signal = signal;
    }
}
