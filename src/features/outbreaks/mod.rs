//! Outbreak detection over district-tagged cases.
//!
//! Counts cases per district in the current window and the window before it,
//! flagging districts above the configured absolute and relative thresholds.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/outbreaks/generate` | Scan for outbreaks, optionally `?asOf=` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OutbreakDetector;
