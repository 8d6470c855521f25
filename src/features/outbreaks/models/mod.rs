mod outbreak_signal;

pub use outbreak_signal::{DetectionWindow, OutbreakSignal};
