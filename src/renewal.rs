use chrono::NaiveDate;

use crate::config::RenewalThresholds;
use crate::error::HealthResult;
use crate::models::{CustomerMetrics, RenewalOutlook, RenewalRisk};

/// Whole days from `today` until the renewal date. Negative once the date has passed.
pub fn days_to_renewal(metrics: &CustomerMetrics, today: NaiveDate) -> HealthResult<i64> {
    let renewal_date = metrics.parsed_renewal_date()?;
    Ok((renewal_date - today).num_days())
}

pub fn renewal_risk_flag(days: i64, score: i32, thresholds: &RenewalThresholds) -> RenewalRisk {
    if days < thresholds.window_days && score < thresholds.at_risk_score {
        RenewalRisk::HighRisk
    } else if days < thresholds.window_days {
        RenewalRisk::Approaching
    } else {
        RenewalRisk::NoImmediateRisk
    }
}

pub fn analyze_renewal(
    metrics: &CustomerMetrics,
    score: i32,
    today: NaiveDate,
    thresholds: &RenewalThresholds,
) -> HealthResult<RenewalOutlook> {
    let days_to_renewal = days_to_renewal(metrics, today)?;
    Ok(RenewalOutlook {
        days_to_renewal,
        risk: renewal_risk_flag(days_to_renewal, score, thresholds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HealthError;
    use crate::models::sample_metrics;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    fn renewing_on(date: &str) -> CustomerMetrics {
        CustomerMetrics {
            renewal_date: date.to_string(),
            ..sample_metrics()
        }
    }

    #[test]
    fn days_are_signed_around_today() {
        assert_eq!(days_to_renewal(&renewing_on("2026-09-21"), today()).unwrap(), -10);
        assert_eq!(days_to_renewal(&renewing_on("2026-10-01"), today()).unwrap(), 0);
        assert_eq!(days_to_renewal(&renewing_on("2027-01-01"), today()).unwrap(), 92);
    }

    #[test]
    fn invalid_date_propagates() {
        let err = days_to_renewal(&renewing_on("next spring"), today()).unwrap_err();
        assert!(matches!(err, HealthError::InvalidDate { ref value, .. } if value == "next spring"));
    }

    #[test]
    fn risk_flag_boundaries() {
        let thresholds = RenewalThresholds::default();
        assert_eq!(renewal_risk_flag(89, 49, &thresholds), RenewalRisk::HighRisk);
        assert_eq!(renewal_risk_flag(89, 50, &thresholds), RenewalRisk::Approaching);
        assert_eq!(renewal_risk_flag(90, 0, &thresholds), RenewalRisk::NoImmediateRisk);
        assert_eq!(renewal_risk_flag(90, 100, &thresholds), RenewalRisk::NoImmediateRisk);
        assert_eq!(renewal_risk_flag(-5, 10, &thresholds), RenewalRisk::HighRisk);
    }

    #[test]
    fn custom_window_moves_the_boundary() {
        let thresholds = RenewalThresholds {
            window_days: 30,
            at_risk_score: 50,
        };
        assert_eq!(renewal_risk_flag(45, 20, &thresholds), RenewalRisk::NoImmediateRisk);
    }

    #[test]
    fn outlook_combines_days_and_flag() {
        let outlook = analyze_renewal(
            &renewing_on("2026-11-15"),
            45,
            today(),
            &RenewalThresholds::default(),
        )
        .unwrap();
        assert_eq!(outlook.days_to_renewal, 45);
        assert_eq!(outlook.risk, RenewalRisk::HighRisk);
    }
}
