use std::fmt::Write;

use chrono::NaiveDate;

use crate::error::HealthResult;
use crate::models::{CustomerAssessment, PortfolioSummary, ScoredCustomer};

pub fn build_portfolio_section(
    output: &mut String,
    summary: &PortfolioSummary,
    scored: &[&ScoredCustomer],
) {
    let _ = writeln!(output, "## Portfolio Overview");
    let _ = writeln!(
        output,
        "Healthy: {} | At Risk: {} | Critical: {} | Avg Health Score: {:.1}",
        summary.healthy, summary.at_risk, summary.critical, summary.average_score
    );
    let _ = writeln!(output);

    if scored.is_empty() {
        let _ = writeln!(output, "No customers match the selected statuses.");
        return;
    }

    for customer in scored {
        let reasons = if customer.health.reasons.is_empty() {
            "no issues flagged".to_string()
        } else {
            customer.health.reasons.join(", ")
        };
        let _ = writeln!(
            output,
            "- {}: {} ({}) - {}",
            customer.metrics.customer_name, customer.health.score, customer.health.status, reasons
        );
    }
}

pub fn build_customer_section(output: &mut String, assessment: &CustomerAssessment) {
    let metrics = &assessment.metrics;

    let _ = writeln!(output, "## Customer Overview: {}", metrics.customer_name);
    let _ = writeln!(
        output,
        "Health Score: {} | Status: {} | NPS: {}",
        assessment.health.score, assessment.health.status, metrics.nps
    );
    let _ = writeln!(output);

    let _ = writeln!(output, "### Key Signals");
    let _ = writeln!(output, "- Usage per week: {}", metrics.usage_per_week);
    let _ = writeln!(output, "- Open tickets: {}", metrics.open_tickets);
    let _ = writeln!(output, "- Days since last login: {}", metrics.days_since_login);
    let _ = writeln!(
        output,
        "- Contract age (months): {}",
        metrics.contract_age_months
    );
    let _ = writeln!(output, "- Contract value: {:.0}", metrics.contract_value);
    let _ = writeln!(output);

    let _ = writeln!(output, "### Trends vs Previous Period");
    let _ = writeln!(output, "- Usage change: {:+}", assessment.trends.usage);
    let _ = writeln!(output, "- Ticket change: {:+}", assessment.trends.tickets);
    let _ = writeln!(output, "- NPS change: {:+}", assessment.trends.nps);
    let _ = writeln!(output);

    let _ = writeln!(output, "### Revenue Signals");
    let _ = writeln!(
        output,
        "- Days to renewal: {}",
        assessment.renewal.days_to_renewal
    );
    let _ = writeln!(output, "- {}", assessment.renewal.risk);
    let _ = writeln!(output);

    let _ = writeln!(output, "### Recommended Next Actions");
    if assessment.actions.is_empty() {
        let _ = writeln!(output, "No action needed.");
    } else {
        for action in &assessment.actions {
            let _ = writeln!(output, "- {action}");
        }
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "### Client-Facing Summary");
    let _ = writeln!(output, "{}", assessment.summary);
    let _ = writeln!(output);

    let _ = writeln!(output, "### Client Email Draft");
    let _ = writeln!(output, "```text");
    let _ = write!(output, "{}", assessment.email);
    let _ = writeln!(output, "```");
}

pub fn build_report(
    today: NaiveDate,
    summary: &PortfolioSummary,
    scored: &[&ScoredCustomer],
    assessments: &[(String, HealthResult<CustomerAssessment>)],
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Customer Health Report");
    let _ = writeln!(output, "Generated {today}");
    let _ = writeln!(output);

    build_portfolio_section(&mut output, summary, scored);

    for (name, assessment) in assessments {
        let _ = writeln!(output);
        match assessment {
            Ok(assessment) => build_customer_section(&mut output, assessment),
            Err(err) => {
                let _ = writeln!(output, "## Customer Overview: {name}");
                let _ = writeln!(output, "Unable to assess this customer: {err}");
            }
        }
    }

    output
}
