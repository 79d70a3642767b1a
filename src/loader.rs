use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::error::{HealthError, HealthResult};
use crate::models::CustomerMetrics;

pub const REQUIRED_COLUMNS: [&str; 11] = [
    "customer_name",
    "usage_per_week",
    "open_tickets",
    "nps",
    "days_since_login",
    "contract_age_months",
    "usage_prev_period",
    "open_tickets_prev_period",
    "nps_prev_period",
    "renewal_date",
    "contract_value",
];

/// Values outside their conventional range. Reported, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainWarning {
    NpsOutOfRange { field: &'static str, value: f64 },
    NegativeValue { field: &'static str, value: f64 },
    EmptyName,
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainWarning::NpsOutOfRange { field, value } => {
                write!(f, "{field} {value} is outside 0-10")
            }
            DomainWarning::NegativeValue { field, value } => {
                write!(f, "{field} is negative ({value})")
            }
            DomainWarning::EmptyName => write!(f, "customer_name is empty"),
        }
    }
}

pub fn missing_columns<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let present: Vec<&str> = headers.into_iter().map(str::trim).collect();
    REQUIRED_COLUMNS
        .iter()
        .filter(|column| !present.contains(*column))
        .map(|column| column.to_string())
        .collect()
}

/// Reads a whole batch. The header row is checked first, so a batch with
/// missing columns is rejected before any record is produced.
pub fn read_customers<R: Read>(source: R) -> HealthResult<Vec<CustomerMetrics>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let missing = missing_columns(reader.headers()?.iter());
    if !missing.is_empty() {
        log::warn!("rejecting batch, missing columns: {}", missing.join(", "));
        return Err(HealthError::Schema { missing });
    }

    let mut customers = Vec::new();
    for result in reader.deserialize::<CustomerMetrics>() {
        let metrics = result?;
        for warning in domain_warnings(&metrics) {
            log::warn!("{}: {warning}", metrics.customer_name);
        }
        customers.push(metrics);
    }

    log::info!("loaded {} customers", customers.len());
    Ok(customers)
}

pub fn load_customers(path: &Path) -> HealthResult<Vec<CustomerMetrics>> {
    log::debug!("reading customers from {}", path.display());
    read_customers(std::fs::File::open(path)?)
}

pub fn domain_warnings(metrics: &CustomerMetrics) -> Vec<DomainWarning> {
    let mut warnings = Vec::new();

    if metrics.customer_name.trim().is_empty() {
        warnings.push(DomainWarning::EmptyName);
    }

    for (field, value) in [("nps", metrics.nps), ("nps_prev_period", metrics.nps_prev_period)] {
        if !(0.0..=10.0).contains(&value) {
            warnings.push(DomainWarning::NpsOutOfRange { field, value });
        }
    }

    let non_negative = [
        ("usage_per_week", metrics.usage_per_week),
        ("usage_prev_period", metrics.usage_prev_period),
        ("open_tickets", metrics.open_tickets as f64),
        ("open_tickets_prev_period", metrics.open_tickets_prev_period as f64),
        ("days_since_login", metrics.days_since_login as f64),
        ("contract_age_months", metrics.contract_age_months),
        ("contract_value", metrics.contract_value),
    ];
    for (field, value) in non_negative {
        if value < 0.0 {
            warnings.push(DomainWarning::NegativeValue { field, value });
        }
    }

    warnings
}
