use crate::config::RenewalThresholds;
use crate::models::CustomerMetrics;

pub const ENABLEMENT_SCORE: i32 = 50;
pub const LOW_USAGE: f64 = 2.0;
pub const EXPANSION_SCORE: i32 = 75;
pub const EXPANSION_NPS: f64 = 8.0;

pub struct ActionInputs<'a> {
    pub metrics: &'a CustomerMetrics,
    pub score: i32,
    pub days_to_renewal: i64,
    pub renewal_window_days: i64,
}

pub struct ActionRule {
    pub applies: fn(&ActionInputs<'_>) -> bool,
    pub action: &'static str,
}

pub const ACTION_RULES: [ActionRule; 4] = [
    ActionRule {
        applies: |i| i.score < ENABLEMENT_SCORE,
        action: "Schedule enablement session",
    },
    ActionRule {
        applies: |i| i.metrics.usage_per_week < LOW_USAGE,
        action: "Offer onboarding refresher",
    },
    ActionRule {
        applies: |i| i.days_to_renewal < i.renewal_window_days,
        action: "Prepare renewal alignment call",
    },
    ActionRule {
        applies: |i| i.score > EXPANSION_SCORE && i.metrics.nps > EXPANSION_NPS,
        action: "Explore expansion opportunity",
    },
];

/// Recommended next steps in rule order. An empty list means no action is needed.
pub fn recommend_actions(
    metrics: &CustomerMetrics,
    score: i32,
    days_to_renewal: i64,
    thresholds: &RenewalThresholds,
) -> Vec<&'static str> {
    let inputs = ActionInputs {
        metrics,
        score,
        days_to_renewal,
        renewal_window_days: thresholds.window_days,
    };

    ACTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(&inputs))
        .map(|rule| rule.action)
        .collect()
}
