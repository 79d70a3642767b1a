use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HealthError, HealthResult};

pub const RENEWAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// One customer's current and previous-period signals, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    pub customer_name: String,
    pub usage_per_week: f64,
    #[serde(deserialize_with = "whole_number")]
    pub open_tickets: i64,
    pub nps: f64,
    #[serde(deserialize_with = "whole_number")]
    pub days_since_login: i64,
    pub contract_age_months: f64,
    pub usage_prev_period: f64,
    #[serde(deserialize_with = "whole_number")]
    pub open_tickets_prev_period: i64,
    pub nps_prev_period: f64,
    pub renewal_date: String,
    pub contract_value: f64,
}

/// Accepts counts written as `8` or `8.0`; rejects fractional values.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "expected a whole number, got {value}"
        )));
    }
    Ok(value as i64)
}

impl CustomerMetrics {
    pub fn parsed_renewal_date(&self) -> HealthResult<NaiveDate> {
        NaiveDate::parse_from_str(self.renewal_date.trim(), RENEWAL_DATE_FORMAT).map_err(
            |source| HealthError::InvalidDate {
                customer: self.customer_name.clone(),
                value: self.renewal_date.clone(),
                source,
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Green,
    Amber,
    Red,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [HealthStatus::Green, HealthStatus::Amber, HealthStatus::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Green => "Green",
            HealthStatus::Amber => "Amber",
            HealthStatus::Red => "Red",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub score: i32,
    pub status: HealthStatus,
    pub reasons: Vec<&'static str>,
}

/// Signed change of each metric against the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendDeltas {
    pub usage: f64,
    pub tickets: i64,
    pub nps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenewalRisk {
    HighRisk,
    Approaching,
    NoImmediateRisk,
}

impl RenewalRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenewalRisk::HighRisk => "High renewal risk",
            RenewalRisk::Approaching => "Renewal approaching",
            RenewalRisk::NoImmediateRisk => "No immediate renewal risk",
        }
    }
}

impl fmt::Display for RenewalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenewalOutlook {
    pub days_to_renewal: i64,
    pub risk: RenewalRisk,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredCustomer {
    pub metrics: CustomerMetrics,
    pub health: HealthReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerAssessment {
    pub metrics: CustomerMetrics,
    pub health: HealthReport,
    pub trends: TrendDeltas,
    pub renewal: RenewalOutlook,
    pub actions: Vec<&'static str>,
    pub summary: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub healthy: usize,
    pub at_risk: usize,
    pub critical: usize,
    pub average_score: f64,
}

#[cfg(test)]
pub(crate) fn sample_metrics() -> CustomerMetrics {
    CustomerMetrics {
        customer_name: "Northwind Logistics".to_string(),
        usage_per_week: 4.0,
        open_tickets: 2,
        nps: 8.0,
        days_since_login: 3,
        contract_age_months: 12.0,
        usage_prev_period: 4.0,
        open_tickets_prev_period: 2,
        nps_prev_period: 8.0,
        renewal_date: "2026-12-31".to_string(),
        contract_value: 12000.0,
    }
}
