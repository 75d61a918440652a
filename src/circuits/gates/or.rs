use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Or;

impl GateImpl for Or {
    fn id() -> &'static str {
        "OrGate"
    }

    fn display_name() -> &'static str {
        "OR gate"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        if input {
            GateOutput {
                out: true,
                fin: true,
            }
        } else {
            GateOutput {
                out: false,
                fin: false,
            }
        }
    }
}
