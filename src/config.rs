use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HealthResult;

/// Cut-offs for the renewal risk flag and the renewal alignment action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenewalThresholds {
    pub window_days: i64,
    pub at_risk_score: i32,
}

impl Default for RenewalThresholds {
    fn default() -> Self {
        Self {
            window_days: 90,
            at_risk_score: 50,
        }
    }
}

/// Tier boundaries for the client-facing narrative. Kept apart from
/// [`RenewalThresholds`]; the two sets are tuned independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeThresholds {
    pub strong_score: i32,
    pub steady_score: i32,
    pub imminent_days: i64,
    pub upcoming_days: i64,
}

impl Default for NarrativeThresholds {
    fn default() -> Self {
        Self {
            strong_score: 75,
            steady_score: 50,
            imminent_days: 60,
            upcoming_days: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub renewal: RenewalThresholds,
    pub narrative: NarrativeThresholds,
}

impl Thresholds {
    pub fn from_json(raw: &str) -> HealthResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> HealthResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let thresholds = Self::from_json(&raw)?;
        log::debug!("loaded thresholds from {}: {thresholds:?}", path.display());
        Ok(thresholds)
    }
}
