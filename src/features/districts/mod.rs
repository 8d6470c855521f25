//! District boundaries and point-to-district resolution.
//!
//! Boundaries are GeoJSON polygons or multi-polygons stored with a name,
//! province and priority. A point resolves to the first boundary containing it,
//! ordered by `priority`, then `name`; no match resolves to `Unknown`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/districts` | List boundaries in precedence order |
//! | POST | `/api/districts` | Register a boundary |
//! | POST | `/api/districts/resolve` | Resolve `{lng, lat}` to district/province |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::{DistrictResolver, DistrictService};
pub use stores::{BoundaryStore, PgBoundaryStore};
