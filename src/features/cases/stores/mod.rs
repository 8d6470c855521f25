mod case_store;

pub use case_store::{CaseStore, PgCaseStore};
