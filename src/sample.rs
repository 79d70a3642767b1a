//! Seeded sample portfolio for demos and smoke runs.
//!
//! The same seed and start date always produce the same customers.

use std::io::Write;

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::error::HealthResult;
use crate::models::{CustomerMetrics, RENEWAL_DATE_FORMAT};

pub const DEFAULT_CUSTOMER_COUNT: usize = 6;

pub fn generate_customers(count: usize, seed: u64, today: NaiveDate) -> Vec<CustomerMetrics> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let mut customers = Vec::with_capacity(count);

    for i in 0..count {
        let usage: i64 = rng.gen_range(0..=6);
        let tickets: i64 = rng.gen_range(0..=10);
        let nps: i64 = rng.gen_range(3..=10);
        let days_since_login = rng.gen_range(0..=45);
        let contract_age_months: i64 = rng.gen_range(1..=24);

        let usage_prev = (usage + rng.gen_range(-2..=2)).max(0);
        let tickets_prev = (tickets + rng.gen_range(-2..=2)).max(0);
        let nps_prev = (nps + rng.gen_range(-2..=2)).clamp(0, 10);
        let renewal = today + Duration::days(rng.gen_range(30..=180));
        let contract_value: i64 = rng.gen_range(3000..=25000);

        customers.push(CustomerMetrics {
            customer_name: format!("Sample Customer {}", i + 1),
            usage_per_week: usage as f64,
            open_tickets: tickets,
            nps: nps as f64,
            days_since_login,
            contract_age_months: contract_age_months as f64,
            usage_prev_period: usage_prev as f64,
            open_tickets_prev_period: tickets_prev,
            nps_prev_period: nps_prev as f64,
            renewal_date: renewal.format(RENEWAL_DATE_FORMAT).to_string(),
            contract_value: contract_value as f64,
        });
    }

    log::info!("generated {count} sample customers (seed {seed})");
    customers
}

pub fn write_customers<W: Write>(sink: W, customers: &[CustomerMetrics]) -> HealthResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for customer in customers {
        writer.serialize(customer)?;
    }
    writer.flush()?;
    Ok(())
}
