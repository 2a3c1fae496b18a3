//! opsdash main entrypoint.

use opsdash::run;
use opsdash::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
