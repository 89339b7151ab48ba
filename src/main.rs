//! rPetCare main entrypoint.

use rpetcare::run;
use rpetcare::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
