use crate::direction::{Direction4, Direction4Array};

use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Not;

impl GateImpl for Not {
    fn id() -> &'static str {
        "NotGate"
    }

    fn display_name() -> &'static str {
        "NOT gate"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        GateOutput {
            out: !input,
            fin: true,
        }
    }

    fn inputs() -> Direction4Array<bool> {
        Direction4Array::only(&[Direction4::Left])
    }
}
