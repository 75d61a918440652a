use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Xnor;

impl GateImpl for Xnor {
    fn id() -> &'static str {
        "XnorGate"
    }

    fn display_name() -> &'static str {
        "XNOR gate"
    }

    fn init_state() -> bool {
        true
    }

    fn fold(state: &mut bool, input: bool) -> GateOutput {
        if input {
            *state = !*state;
        }

        GateOutput {
            out: *state,
            fin: false,
        }
    }
}
