use crate::models::{CustomerMetrics, HealthReport, HealthStatus};

pub const BASE_SCORE: i32 = 100;
pub const GREEN_MIN_SCORE: i32 = 70;
pub const AMBER_MIN_SCORE: i32 = 40;

pub struct HealthRule {
    pub applies: fn(&CustomerMetrics) -> bool,
    pub penalty: i32,
    pub reason: &'static str,
}

/// Deductions in evaluation order. Every rule is checked; each fires at most once.
pub const HEALTH_RULES: [HealthRule; 5] = [
    HealthRule {
        applies: |m| m.usage_per_week < 2.0,
        penalty: 25,
        reason: "Low product usage",
    },
    HealthRule {
        applies: |m| m.open_tickets > 5,
        penalty: 20,
        reason: "High support ticket volume",
    },
    HealthRule {
        applies: |m| m.nps < 6.0,
        penalty: 20,
        reason: "Low NPS score",
    },
    HealthRule {
        applies: |m| m.days_since_login > 14,
        penalty: 15,
        reason: "No recent login activity",
    },
    HealthRule {
        applies: |m| m.contract_age_months < 3.0,
        penalty: 10,
        reason: "Early lifecycle customer",
    },
];

pub fn score_customer(metrics: &CustomerMetrics) -> HealthReport {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    for rule in HEALTH_RULES.iter() {
        if (rule.applies)(metrics) {
            score -= rule.penalty;
            reasons.push(rule.reason);
        }
    }

    let score = score.clamp(0, BASE_SCORE);
    HealthReport {
        score,
        status: status_for(score),
        reasons,
    }
}

pub fn status_for(score: i32) -> HealthStatus {
    match score {
        s if s >= GREEN_MIN_SCORE => HealthStatus::Green,
        s if s >= AMBER_MIN_SCORE => HealthStatus::Amber,
        _ => HealthStatus::Red,
    }
}
