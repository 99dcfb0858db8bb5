use customer_store::{logging, prelude::run_app};
use std::process::exit;

fn main() {
    logging::init_logging();

    if let Err(err) = run_app() {
        eprintln!("Error: {err}");
        exit(1);
    }
}
