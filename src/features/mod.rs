pub mod alerts;
pub mod cases;
pub mod districts;
pub mod outbreaks;
