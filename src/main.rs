//! shiftclock main entrypoint.

use shiftclock::run;
use shiftclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
