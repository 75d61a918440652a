use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct And;

impl GateImpl for And {
    fn id() -> &'static str {
        "AndGate"
    }

    fn display_name() -> &'static str {
        "AND gate"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        if input {
            GateOutput {
                out: true,
                fin: false,
            }
        } else {
            GateOutput {
                out: false,
                fin: true,
            }
        }
    }
}
