pub mod outbreak_handler;

pub use outbreak_handler::*;
