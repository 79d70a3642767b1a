use chrono::NaiveDate;

use crate::actions;
use crate::config::Thresholds;
use crate::error::{HealthError, HealthResult};
use crate::health;
use crate::models::{
    CustomerAssessment, CustomerMetrics, HealthStatus, PortfolioSummary, ScoredCustomer,
};
use crate::narrative;
use crate::renewal;
use crate::trends;

/// Scores every record, keeping the input order.
pub fn score_portfolio(records: &[CustomerMetrics]) -> Vec<ScoredCustomer> {
    records
        .iter()
        .map(|metrics| ScoredCustomer {
            health: health::score_customer(metrics),
            metrics: metrics.clone(),
        })
        .collect()
}

pub fn summarize_portfolio(scored: &[ScoredCustomer]) -> PortfolioSummary {
    let count_status =
        |status: HealthStatus| scored.iter().filter(|c| c.health.status == status).count();

    let average_score = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|c| c.health.score as f64).sum::<f64>() / scored.len() as f64
    };

    PortfolioSummary {
        healthy: count_status(HealthStatus::Green),
        at_risk: count_status(HealthStatus::Amber),
        critical: count_status(HealthStatus::Red),
        average_score,
    }
}

pub fn filter_by_status<'a>(
    scored: &'a [ScoredCustomer],
    statuses: &[HealthStatus],
) -> Vec<&'a ScoredCustomer> {
    scored
        .iter()
        .filter(|c| statuses.contains(&c.health.status))
        .collect()
}

pub fn find_customer<'a>(
    records: &'a [CustomerMetrics],
    name: &str,
) -> HealthResult<&'a CustomerMetrics> {
    records
        .iter()
        .find(|m| m.customer_name == name)
        .ok_or_else(|| HealthError::CustomerNotFound {
            name: name.to_string(),
        })
}

/// Runs the full pipeline for one customer: score, trends, renewal, actions,
/// summary, then email. Fails only when the renewal date cannot be parsed.
pub fn assess_customer(
    metrics: &CustomerMetrics,
    today: NaiveDate,
    thresholds: &Thresholds,
) -> HealthResult<CustomerAssessment> {
    let health = health::score_customer(metrics);
    let trends = trends::calculate_trends(metrics);
    let renewal = renewal::analyze_renewal(metrics, health.score, today, &thresholds.renewal)?;
    let actions = actions::recommend_actions(
        metrics,
        health.score,
        renewal.days_to_renewal,
        &thresholds.renewal,
    );
    let summary = narrative::generate_summary(
        metrics,
        health.score,
        &trends,
        renewal.days_to_renewal,
        &thresholds.narrative,
    );
    let email = narrative::draft_email(metrics, &summary);

    Ok(CustomerAssessment {
        metrics: metrics.clone(),
        health,
        trends,
        renewal,
        actions,
        summary,
        email,
    })
}

/// Assesses each record independently; a bad renewal date only fails its own entry.
pub fn assess_batch(
    records: &[CustomerMetrics],
    today: NaiveDate,
    thresholds: &Thresholds,
) -> Vec<HealthResult<CustomerAssessment>> {
    records
        .iter()
        .map(|metrics| {
            let result = assess_customer(metrics, today, thresholds);
            if let Err(err) = &result {
                log::warn!("skipping assessment for {}: {err}", metrics.customer_name);
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_metrics, RenewalRisk};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    fn struggling() -> CustomerMetrics {
        CustomerMetrics {
            customer_name: "Contoso Retail".to_string(),
            usage_per_week: 1.0,
            open_tickets: 8,
            nps: 4.0,
            days_since_login: 20,
            contract_age_months: 1.0,
            renewal_date: "2026-11-01".to_string(),
            ..sample_metrics()
        }
    }

    #[test]
    fn struggling_customer_end_to_end() {
        let assessment = assess_customer(&struggling(), today(), &Thresholds::default()).unwrap();
        assert_eq!(assessment.health.score, 10);
        assert_eq!(assessment.health.status, HealthStatus::Red);
        assert_eq!(assessment.renewal.days_to_renewal, 31);
        assert_eq!(assessment.renewal.risk, RenewalRisk::HighRisk);
        assert!(assessment.actions.contains(&"Schedule enablement session"));
        assert!(assessment.actions.contains(&"Offer onboarding refresher"));
        assert!(assessment.summary.contains("Engagement has softened recently"));
        assert!(assessment.summary.contains("With renewal approaching"));
        assert!(assessment.email.contains(&assessment.summary));
    }

    #[test]
    fn assessment_is_idempotent() {
        let first = assess_customer(&struggling(), today(), &Thresholds::default()).unwrap();
        let second = assess_customer(&struggling(), today(), &Thresholds::default()).unwrap();
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.email, second.email);
        assert_eq!(first.actions, second.actions);
        assert_eq!(first.health, second.health);
    }

    #[test]
    fn bad_date_fails_only_its_record() {
        let broken = CustomerMetrics {
            customer_name: "Broken Co".to_string(),
            renewal_date: "2026-13-40".to_string(),
            ..sample_metrics()
        };
        let results = assess_batch(
            &[sample_metrics(), broken, struggling()],
            today(),
            &Thresholds::default(),
        );
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(HealthError::InvalidDate { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn portfolio_counts_and_average() {
        let scored = score_portfolio(&[sample_metrics(), struggling()]);
        assert_eq!(scored[0].metrics.customer_name, "Northwind Logistics");
        let summary = summarize_portfolio(&scored);
        assert_eq!(summary.healthy, 1);
        assert_eq!(summary.at_risk, 0);
        assert_eq!(summary.critical, 1);
        assert!((summary.average_score - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_portfolio_averages_zero() {
        let summary = summarize_portfolio(&[]);
        assert_eq!(summary.healthy + summary.at_risk + summary.critical, 0);
        assert_eq!(summary.average_score, 0.0);
    }

    #[test]
    fn status_filter_keeps_order() {
        let scored = score_portfolio(&[struggling(), sample_metrics(), struggling()]);
        let red = filter_by_status(&scored, &[HealthStatus::Red]);
        assert_eq!(red.len(), 2);
        let all = filter_by_status(&scored, &HealthStatus::ALL);
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].metrics.customer_name, "Northwind Logistics");
    }

    #[test]
    fn unknown_customer_is_reported() {
        let records = [sample_metrics()];
        let err = find_customer(&records, "Fabrikam").unwrap_err();
        assert!(matches!(err, HealthError::CustomerNotFound { ref name } if name == "Fabrikam"));
        assert!(find_customer(&records, "Northwind Logistics").is_ok());
    }
}
