//! rattendance main entrypoint.

use rattendance::{init_tracing, run, ui::messages::error};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
