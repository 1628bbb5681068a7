//! rStaffClock main entrypoint.

use rstaffclock::run;
use rstaffclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
