use super::{GateImpl, GateOutput};

#[derive(Clone)]
pub struct Nor;

impl GateImpl for Nor {
    fn id() -> &'static str {
        "NorGate"
    }

    fn display_name() -> &'static str {
        "NOR gate"
    }

    fn init_state() -> bool {
        false
    }

    fn fold(_: &mut bool, input: bool) -> GateOutput {
        if input {
            GateOutput {
                out: false,
                fin: true,
            }
        } else {
            GateOutput {
                out: true,
                fin: false,
            }
        }
    }
}
