use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::config::OutbreakConfig;
use crate::core::error::{AppError, Result};
use crate::features::cases::CaseStore;
use crate::features::outbreaks::models::{DetectionWindow, OutbreakSignal};

/// Flags districts whose case counts rose significantly between two adjacent windows
pub struct OutbreakDetector {
    store: Arc<dyn CaseStore>,
    config: OutbreakConfig,
}

impl OutbreakDetector {
    pub fn new(store: Arc<dyn CaseStore>, config: OutbreakConfig) -> Self {
        Self { store, config }
    }

    /// Compare `[as_of - w, as_of)` against `[as_of - 2w, as_of - w)`.
    ///
    /// Read-only. A store failure is returned as-is; no partial result is produced.
    /// An `as_of` too close to the minimum representable time is a bad request.
    pub async fn detect(&self, as_of: DateTime<Utc>) -> Result<Vec<OutbreakSignal>> {
        let (current, previous) = DetectionWindow::pair(as_of, self.config.window_days)
            .ok_or_else(|| AppError::BadRequest("asOf out of range".to_string()))?;

        let current_counts = self
            .store
            .count_by_district(current.start, current.end)
            .await?;
        let previous_counts = self
            .store
            .count_by_district(previous.start, previous.end)
            .await?;

        let signals = flag_outbreaks(&current_counts, &previous_counts, &self.config);

        tracing::info!(
            "Outbreak scan as of {}: {} districts with recent cases, {} flagged",
            as_of,
            current_counts.len(),
            signals.len()
        );

        Ok(signals)
    }
}

/// Apply the threshold rule to per-district counts.
///
/// A district is flagged iff `current > min_cases` and `current > previous * growth_factor`,
/// both strict. Districts absent from `previous` count as zero there.
/// Results are ordered by current count descending, then district name.
pub fn flag_outbreaks(
    current: &HashMap<String, i64>,
    previous: &HashMap<String, i64>,
    config: &OutbreakConfig,
) -> Vec<OutbreakSignal> {
    let mut signals: Vec<OutbreakSignal> = current
        .iter()
        .filter_map(|(district, &curr)| {
            let prev = previous.get(district).copied().unwrap_or(0);
            let flagged =
                curr > config.min_cases && curr as f64 > prev as f64 * config.growth_factor;
            if !flagged {
                return None;
            }

            let increase = (prev != 0).then(|| (curr - prev) as f64 / prev as f64 * 100.0);

            Some(OutbreakSignal {
                district: district.clone(),
                current_count: curr,
                previous_count: prev,
                increase,
                new_outbreak: prev == 0,
            })
        })
        .collect();

    signals.sort_by(|a, b| {
        b.current_count
            .cmp(&a.current_count)
            .then_with(|| a.district.cmp(&b.district))
    });

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{FailingCaseStore, InMemoryCaseStore};
    use chrono::{Duration, TimeZone};

    fn counts(entries: &[(&str, i64)]) -> HashMap<String, i64> {
        entries.iter().map(|(d, c)| (d.to_string(), *c)).collect()
    }

    #[test]
    fn test_flags_tripling() {
        let signals = flag_outbreaks(
            &counts(&[("Lusaka", 6)]),
            &counts(&[("Lusaka", 2)]),
            &OutbreakConfig::default(),
        );

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].district, "Lusaka");
        assert_eq!(signals[0].current_count, 6);
        assert_eq!(signals[0].previous_count, 2);
        assert_eq!(signals[0].increase, Some(200.0));
        assert!(!signals[0].new_outbreak);
    }

    #[test]
    fn test_exactly_min_cases_never_flags() {
        for prev in [0, 1, 2, 3, 10] {
            let signals = flag_outbreaks(
                &counts(&[("Ndola", 5)]),
                &counts(&[("Ndola", prev)]),
                &OutbreakConfig::default(),
            );
            assert!(signals.is_empty(), "prev={} should not flag", prev);
        }
    }

    #[test]
    fn test_zero_previous_is_new_outbreak() {
        let signals = flag_outbreaks(
            &counts(&[("Kitwe", 6)]),
            &HashMap::new(),
            &OutbreakConfig::default(),
        );

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].previous_count, 0);
        assert_eq!(signals[0].increase, None);
        assert!(signals[0].new_outbreak);

        let json = serde_json::to_value(&signals[0]).unwrap();
        assert!(json["increase"].is_null());
        assert_eq!(json["newOutbreak"], true);
    }

    #[test]
    fn test_growth_is_strict() {
        // 9 is exactly 6 * 1.5
        assert!(flag_outbreaks(
            &counts(&[("Mansa", 9)]),
            &counts(&[("Mansa", 6)]),
            &OutbreakConfig::default()
        )
        .is_empty());

        assert_eq!(
            flag_outbreaks(
                &counts(&[("Mansa", 10)]),
                &counts(&[("Mansa", 6)]),
                &OutbreakConfig::default()
            )
            .len(),
            1
        );
    }

    #[test]
    fn test_previous_only_districts_ignored_and_ordering() {
        let signals = flag_outbreaks(
            &counts(&[("Chipata", 8), ("Choma", 12), ("Mongu", 8)]),
            &counts(&[("Solwezi", 40)]),
            &OutbreakConfig::default(),
        );

        let names: Vec<&str> = signals.iter().map(|s| s.district.as_str()).collect();
        assert_eq!(names, vec!["Choma", "Chipata", "Mongu"]);
    }

    #[test]
    fn test_window_pair() {
        let as_of = Utc.with_ymd_and_hms(2024, 3, 29, 12, 0, 0).unwrap();
        let (current, previous) = DetectionWindow::pair(as_of, 14).unwrap();

        assert_eq!(current.end, as_of);
        assert_eq!(current.start, as_of - Duration::days(14));
        assert_eq!(previous.end, current.start);
        assert_eq!(previous.start, as_of - Duration::days(28));
    }

    #[test]
    fn test_window_pair_out_of_range() {
        let as_of = DateTime::<Utc>::MIN_UTC + Duration::days(20);
        assert!(DetectionWindow::pair(as_of, 14).is_none());
        assert!(DetectionWindow::pair(Utc::now(), i64::MAX).is_none());
    }

    #[tokio::test]
    async fn test_detect_rejects_as_of_near_minimum() {
        let detector = OutbreakDetector::new(
            Arc::new(InMemoryCaseStore::default()),
            OutbreakConfig::default(),
        );
        let as_of = DateTime::<Utc>::MIN_UTC + Duration::days(1);

        let err = detector.detect(as_of).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_detect_reads_both_windows() {
        let as_of = Utc.with_ymd_and_hms(2024, 3, 29, 12, 0, 0).unwrap();
        let store = Arc::new(InMemoryCaseStore::default());

        for day in 1..=7 {
            store.insert_at("Lusaka", as_of - Duration::days(day));
        }
        for day in 15..=16 {
            store.insert_at("Lusaka", as_of - Duration::days(day));
        }
        // Outside both windows
        store.insert_at("Lusaka", as_of - Duration::days(40));
        store.insert_at("Lusaka", as_of);
        for day in 1..=6 {
            store.insert_at("Ndola", as_of - Duration::days(day));
        }

        let detector = OutbreakDetector::new(store, OutbreakConfig::default());
        let signals = detector.detect(as_of).await.unwrap();

        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].district, "Lusaka");
        assert_eq!(signals[0].current_count, 7);
        assert_eq!(signals[0].previous_count, 2);
        assert_eq!(signals[0].increase, Some(250.0));
        assert_eq!(signals[1].district, "Ndola");
        assert!(signals[1].new_outbreak);
    }

    #[tokio::test]
    async fn test_detect_surfaces_store_failure() {
        let detector = OutbreakDetector::new(Arc::new(FailingCaseStore), OutbreakConfig::default());
        tokio_test::assert_err!(detector.detect(Utc::now()).await);
    }
}
