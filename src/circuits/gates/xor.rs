use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Xor;

impl GateImpl for Xor {
    fn id() -> &'static str {
        "XorGate"
    }

    fn display_name() -> &'static str {
        "XOR gate"
    }

    fn init_state() -> bool {
        false
    }

    // Odd parity, not "exactly one".
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
