//! Malaria case reports.
//!
//! A submitted case is tagged with the district and province containing its
//! reported location, exactly once, before it is stored.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/cases` | Submit a case report |
//! | GET | `/api/cases` | List the 100 most recent cases |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::CaseService;
pub use stores::{CaseStore, PgCaseStore};
