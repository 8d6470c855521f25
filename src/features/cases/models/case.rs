use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Rapid diagnostic test outcome, matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "rdt_result")]
pub enum RdtResult {
    Positive,
    Negative,
}

impl std::fmt::Display for RdtResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RdtResult::Positive => write!(f, "Positive"),
            RdtResult::Negative => write!(f, "Negative"),
        }
    }
}

/// Patient gender, matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "patient_gender")]
pub enum PatientGender {
    Male,
    Female,
}

/// Case follow-up status, matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "case_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Investigating,
    Resolved,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Pending => write!(f, "pending"),
            CaseStatus::Investigating => write!(f, "investigating"),
            CaseStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Database model for a reported case.
///
/// `district` and `province` are written once at submission and never re-resolved.
#[derive(Debug, Clone, FromRow)]
pub struct Case {
    pub id: Uuid,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub patient_age: i32,
    pub patient_gender: PatientGender,
    pub lng: f64,
    pub lat: f64,
    pub district: Option<String>,
    pub province: Option<String>,
    pub symptoms: Vec<String>,
    pub rdt_result: RdtResult,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
}

/// Data for persisting a new case, district already resolved
#[derive(Debug, Clone)]
pub struct CreateCase {
    pub reporter_name: String,
    pub reporter_phone: String,
    pub patient_age: i32,
    pub patient_gender: PatientGender,
    pub lng: f64,
    pub lat: f64,
    pub district: String,
    pub province: String,
    pub symptoms: Vec<String>,
    pub rdt_result: RdtResult,
}
