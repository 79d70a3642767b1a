//! Client-facing narrative and email text.
//!
//! Tier selection is table driven: each section holds tiers ordered from the
//! highest floor down, and the first tier whose floor the value reaches wins.
//! Values below every floor get the table's fallback text.

use crate::config::NarrativeThresholds;
use crate::models::{CustomerMetrics, TrendDeltas};

const STEADY_TREND: &str = "Engagement levels are broadly consistent period over period.";

struct Tier {
    floor: i64,
    text: &'static str,
}

struct TierTable {
    tiers: [Tier; 2],
    fallback: &'static str,
}

impl TierTable {
    fn select(&self, value: i64) -> &'static str {
        self.tiers
            .iter()
            .find(|tier| value >= tier.floor)
            .map_or(self.fallback, |tier| tier.text)
    }
}

fn engagement_tiers(thresholds: &NarrativeThresholds) -> TierTable {
    TierTable {
        tiers: [
            Tier {
                floor: i64::from(thresholds.strong_score),
                text: "Overall engagement is strong. Platform usage is consistent and well \
                       embedded in day-to-day workflows.",
            },
            Tier {
                floor: i64::from(thresholds.steady_score),
                text: "Engagement is steady, with clear signs of value being realised. \
                       There are opportunities to unlock additional benefit.",
            },
        ],
        fallback: "Engagement has softened recently, suggesting priorities may have shifted. \
                   This is a good moment to realign the platform to current needs.",
    }
}

fn outlook_tiers(thresholds: &NarrativeThresholds) -> TierTable {
    TierTable {
        tiers: [
            Tier {
                floor: thresholds.upcoming_days,
                text: "Our focus remains on long-term value and continuous improvement.",
            },
            Tier {
                floor: thresholds.imminent_days,
                text: "As we move toward the next renewal window, we’ll continue strengthening \
                       adoption and impact.",
            },
        ],
        fallback: "With renewal approaching, this is an ideal time to ensure the platform \
                   is fully aligned to your goals and delivering maximum value.",
    }
}

fn trend_notes(trends: &TrendDeltas) -> Vec<&'static str> {
    let mut notes = Vec::new();

    if trends.usage > 0.0 {
        notes.push("Usage has increased compared to the previous period.");
    } else if trends.usage < 0.0 {
        notes.push("Usage is slightly down compared to the previous period.");
    }

    if trends.tickets < 0 {
        notes.push("Support volume has reduced, indicating improved stability.");
    } else if trends.tickets > 0 {
        notes.push("Support activity has increased, highlighting areas to review.");
    }

    notes
}

pub fn generate_summary(
    metrics: &CustomerMetrics,
    score: i32,
    trends: &TrendDeltas,
    days_to_renewal: i64,
    thresholds: &NarrativeThresholds,
) -> String {
    let intro = format!(
        "Here’s a snapshot of how things are currently tracking for **{}**.",
        metrics.customer_name
    );
    let engagement = engagement_tiers(thresholds).select(i64::from(score));

    let notes = trend_notes(trends);
    let seeing = if notes.is_empty() {
        STEADY_TREND.to_string()
    } else {
        notes.join(" ")
    };

    let outlook = outlook_tiers(thresholds).select(days_to_renewal);

    format!(
        "{intro}\n\n\
         **Engagement overview**  \n{engagement}\n\n\
         **What we’re seeing**  \n{seeing}\n\n\
         **Looking ahead**  \n{outlook}"
    )
}

pub fn draft_email(metrics: &CustomerMetrics, summary: &str) -> String {
    let name = &metrics.customer_name;
    format!(
        "Subject: Engagement Overview – {name}\n\
         \n\
         Hi {name} team,\n\
         \n\
         I wanted to share a brief overview of your recent platform engagement and a few observations.\n\
         \n\
         {summary}\n\
         \n\
         If useful, I’d be very happy to set up a short session to walk through this together and discuss next steps.\n\
         \n\
         Best regards,  \n\
         Customer Success Team\n"
    )
}
