pub mod command;
pub mod run;

pub use run::{display_customer, listing_row, run_app};
