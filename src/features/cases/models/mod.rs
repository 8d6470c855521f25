mod case;

pub use case::{Case, CaseStatus, CreateCase, PatientGender, RdtResult};
