mod outbreak_detector;

pub use outbreak_detector::{flag_outbreaks, OutbreakDetector};
