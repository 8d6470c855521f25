//! In-memory stores and transports for service and router tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use sqlx::types::Json;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::alerts::clients::SmsSender;
use crate::features::alerts::models::{Alert, CreateAlert, Language, Subscriber};
use crate::features::alerts::stores::{AlertStore, SubscriberStore};
use crate::features::cases::models::{
    Case, CaseStatus, CreateCase, PatientGender, RdtResult,
};
use crate::features::cases::stores::CaseStore;
use crate::features::districts::models::{
    BoundaryGeometry, CreateDistrictBoundary, DistrictBoundary,
};
use crate::features::districts::stores::BoundaryStore;
use crate::shared::constants::UNKNOWN_REGION;

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

/// Axis-aligned square boundary from `(min_lng, min_lat, max_lng, max_lat)`
pub fn square_boundary(
    name: &str,
    province: &str,
    priority: i32,
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> DistrictBoundary {
    DistrictBoundary {
        id: Uuid::new_v4(),
        name: name.to_string(),
        province: province.to_string(),
        priority,
        geometry: BoundaryGeometry::Polygon(vec![vec![
            [min_x, min_y],
            [max_x, min_y],
            [max_x, max_y],
            [min_x, max_y],
            [min_x, min_y],
        ]]),
        created_at: Utc::now(),
    }
}

// Boundaries

pub struct InMemoryBoundaryStore {
    boundaries: Mutex<Vec<DistrictBoundary>>,
}

impl InMemoryBoundaryStore {
    pub fn new(boundaries: Vec<DistrictBoundary>) -> Self {
        Self {
            boundaries: Mutex::new(boundaries),
        }
    }
}

#[async_trait]
impl BoundaryStore for InMemoryBoundaryStore {
    async fn list_ordered(&self) -> Result<Vec<DistrictBoundary>> {
        let mut boundaries = self.boundaries.lock().unwrap().clone();
        boundaries.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(boundaries)
    }

    async fn create(&self, data: &CreateDistrictBoundary) -> Result<DistrictBoundary> {
        let boundary = DistrictBoundary {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            province: data.province.clone(),
            priority: data.priority,
            geometry: data.geometry.clone(),
            created_at: Utc::now(),
        };
        self.boundaries.lock().unwrap().push(boundary.clone());
        Ok(boundary)
    }
}

pub struct FailingBoundaryStore;

#[async_trait]
impl BoundaryStore for FailingBoundaryStore {
    async fn list_ordered(&self) -> Result<Vec<DistrictBoundary>> {
        Err(unavailable())
    }

    async fn create(&self, _data: &CreateDistrictBoundary) -> Result<DistrictBoundary> {
        Err(unavailable())
    }
}

// Cases

#[derive(Default)]
pub struct InMemoryCaseStore {
    cases: Mutex<Vec<Case>>,
}

impl InMemoryCaseStore {
    pub fn count(&self) -> usize {
        self.cases.lock().unwrap().len()
    }

    /// Store a minimal case in `district` reported at `created_at`
    pub fn insert_at(&self, district: &str, created_at: DateTime<Utc>) {
        self.cases.lock().unwrap().push(Case {
            id: Uuid::new_v4(),
            reporter_name: "Test Reporter".to_string(),
            reporter_phone: "+260970000099".to_string(),
            patient_age: 30,
            patient_gender: PatientGender::Female,
            lng: 28.3,
            lat: -15.4,
            district: Some(district.to_string()),
            province: None,
            symptoms: vec!["fever".to_string()],
            rdt_result: RdtResult::Positive,
            status: CaseStatus::Pending,
            created_at,
        });
    }
}

#[async_trait]
impl CaseStore for InMemoryCaseStore {
    async fn create(&self, data: &CreateCase) -> Result<Case> {
        let case = Case {
            id: Uuid::new_v4(),
            reporter_name: data.reporter_name.clone(),
            reporter_phone: data.reporter_phone.clone(),
            patient_age: data.patient_age,
            patient_gender: data.patient_gender,
            lng: data.lng,
            lat: data.lat,
            district: Some(data.district.clone()),
            province: Some(data.province.clone()),
            symptoms: data.symptoms.clone(),
            rdt_result: data.rdt_result,
            status: CaseStatus::Pending,
            created_at: Utc::now(),
        };
        self.cases.lock().unwrap().push(case.clone());
        Ok(case)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Case>> {
        let cases = self.cases.lock().unwrap();
        // Later insertions win ties on created_at
        let mut indexed: Vec<(usize, &Case)> = cases.iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        Ok(indexed
            .into_iter()
            .take(limit.max(0) as usize)
            .map(|(_, c)| c.clone())
            .collect())
    }

    async fn count_by_district(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<HashMap<String, i64>> {
        let mut counts = HashMap::new();
        for case in self.cases.lock().unwrap().iter() {
            if case.created_at >= from && case.created_at < to {
                let district = case
                    .district
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_REGION.to_string());
                *counts.entry(district).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

pub struct FailingCaseStore;

#[async_trait]
impl CaseStore for FailingCaseStore {
    async fn create(&self, _data: &CreateCase) -> Result<Case> {
        Err(unavailable())
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<Case>> {
        Err(unavailable())
    }

    async fn count_by_district(
        &self,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<HashMap<String, i64>> {
        Err(unavailable())
    }
}

// Alerts

pub fn subscriber(
    phone: &str,
    preferred_language: Option<Language>,
    district: Option<&str>,
) -> Subscriber {
    Subscriber {
        id: Uuid::new_v4(),
        phone_number: phone.to_string(),
        preferred_language,
        district: district.map(String::from),
        created_at: Utc::now(),
    }
}

/// Subscribers kept in registration order
#[derive(Default)]
pub struct InMemorySubscriberStore {
    subscribers: Vec<Subscriber>,
}

impl InMemorySubscriberStore {
    pub fn new(subscribers: Vec<Subscriber>) -> Self {
        Self { subscribers }
    }
}

#[async_trait]
impl SubscriberStore for InMemorySubscriberStore {
    async fn find_by_districts(&self, districts: &[String]) -> Result<Vec<Subscriber>> {
        Ok(self
            .subscribers
            .iter()
            .filter(|s| {
                s.district
                    .as_ref()
                    .is_some_and(|d| districts.contains(d))
            })
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryAlertStore {
    alerts: Mutex<Vec<Alert>>,
}

impl InMemoryAlertStore {
    pub fn count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }
}

#[async_trait]
impl AlertStore for InMemoryAlertStore {
    async fn create(&self, data: &CreateAlert) -> Result<Alert> {
        let alert = Alert {
            id: Uuid::new_v4(),
            messages: Json(data.messages.clone()),
            target_districts: data.target_districts.clone(),
            dominant_language: data.dominant_language,
            sent_at: Utc::now(),
        };
        self.alerts.lock().unwrap().push(alert.clone());
        Ok(alert)
    }
}

/// Records every send; numbers in `failing` get a gateway error instead
#[derive(Default)]
pub struct RecordingSmsSender {
    sent: Mutex<Vec<(Vec<String>, String)>>,
    failing: HashSet<String>,
}

impl RecordingSmsSender {
    pub fn failing_for(phones: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: phones.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Successful sends in call order
    pub fn sent(&self) -> Vec<(Vec<String>, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsSender for RecordingSmsSender {
    async fn send(&self, recipients: &[String], message: &str) -> Result<Value> {
        if recipients.iter().any(|r| self.failing.contains(r)) {
            return Err(AppError::ExternalServiceError(
                "SMS gateway error: HTTP 500".to_string(),
            ));
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipients.to_vec(), message.to_string()));

        let entries: Vec<Value> = recipients
            .iter()
            .map(|r| json!({ "number": r, "status": "Success" }))
            .collect();
        Ok(json!({
            "SMSMessageData": {
                "Message": format!("Sent to {}/{}", entries.len(), recipients.len()),
                "Recipients": entries
            }
        }))
    }
}
