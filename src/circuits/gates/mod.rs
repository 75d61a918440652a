use crate::direction::{Direction4, Direction4Array};

pub mod and;
pub mod nand;
pub mod nor;
pub mod not;
pub mod or;
pub mod xnor;
pub mod xor;

pub struct GateOutput {
    pub out: bool,
    /// Stop folding, `out` is final.
    pub fin: bool,
}

pub trait GateImpl {
    fn id() -> &'static str;
    fn display_name() -> &'static str;
    fn init_state() -> bool;

    /// Called once per input, in input side order.
    fn fold(state: &mut bool, input: bool) -> GateOutput;

    fn inputs() -> Direction4Array<bool> {
        Direction4Array::only(&[Direction4::Up, Direction4::Down])
    }

    fn outputs() -> Direction4Array<bool> {
        Direction4Array::only(&[Direction4::Right])
    }

    /// Folds the inputs in order. No inputs evaluates like a single LOW input.
    fn evaluate(inputs: impl IntoIterator<Item = bool>) -> bool {
        let mut inputs = inputs.into_iter().peekable();
        if inputs.peek().is_none() {
            return Self::evaluate([false]);
        }

        let mut state = Self::init_state();
        let mut out = false;
        for input in inputs {
            let res = Self::fold(&mut state, input);
            out = res.out;
            if res.fin {
                break;
            }
        }
        out
    }
}

macro_rules! gate_kinds {
    ($($gate:ident),* $(,)?) => {
        paste::paste! {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            pub enum GateKind {
                $($gate,)*
            }

            impl GateKind {
                pub const ALL: &'static [GateKind] = &[$(GateKind::$gate,)*];

                pub fn id(self) -> &'static str {
                    match self {
                        $(GateKind::$gate => [<$gate:lower>]::$gate::id(),)*
                    }
                }

                pub fn display_name(self) -> &'static str {
                    match self {
                        $(GateKind::$gate => [<$gate:lower>]::$gate::display_name(),)*
                    }
                }

                pub fn inputs(self) -> Direction4Array<bool> {
                    match self {
                        $(GateKind::$gate => [<$gate:lower>]::$gate::inputs(),)*
                    }
                }

                pub fn outputs(self) -> Direction4Array<bool> {
                    match self {
                        $(GateKind::$gate => [<$gate:lower>]::$gate::outputs(),)*
                    }
                }

                pub fn evaluate(self, inputs: impl IntoIterator<Item = bool>) -> bool {
                    match self {
                        $(GateKind::$gate => [<$gate:lower>]::$gate::evaluate(inputs),)*
                    }
                }
            }
        }
    };
}

gate_kinds!(Not, And, Or, Nand, Nor, Xor, Xnor);

impl GateKind {
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}
