mod boundary_store;

pub use boundary_store::{BoundaryStore, PgBoundaryStore};
