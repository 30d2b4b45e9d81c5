mod config;
mod policy;
mod rules;

pub use config::{PurchaseTier, TrustConfig};
pub use policy::{TrustBadge, TrustLevel};

use super::domain::CatalogWork;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the weight table to catalog works.
pub struct TrustEngine {
    config: TrustConfig,
}

impl TrustEngine {
    pub fn new(config: TrustConfig) -> Self {
        Self { config }
    }

    /// Composite 0-10 score. Never fails: wild inputs are bounded by the
    /// final clamp, the level is decided on the clamped value, and the score
    /// is rounded to one decimal last.
    pub fn score(&self, input: &TrustInput) -> TrustScore {
        let (components, raw) = rules::score_components(input, &self.config);
        let clamped = raw.clamp(0.0, self.config.max_score);
        let level = TrustLevel::for_score(clamped);

        TrustScore {
            score: (clamped * 10.0).round() / 10.0,
            level,
            components,
        }
    }

    pub fn score_work(&self, work: &CatalogWork) -> TrustScore {
        self.score(&TrustInput::from(work))
    }
}

impl Default for TrustEngine {
    fn default() -> Self {
        Self::new(TrustConfig::default())
    }
}

/// Convenience entry point using the production weight table.
pub fn compute_trust_score(
    rating: f64,
    purchase_count: u32,
    is_hit: bool,
    is_new: bool,
) -> TrustScore {
    TrustEngine::default().score(&TrustInput {
        rating,
        purchase_count,
        is_hit,
        is_new,
    })
}

/// Raw signals the scorer consumes; a plain projection of a catalog work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrustInput {
    pub rating: f64,
    pub purchase_count: u32,
    pub is_hit: bool,
    pub is_new: bool,
}

impl From<&CatalogWork> for TrustInput {
    fn from(work: &CatalogWork) -> Self {
        Self {
            rating: work.rating,
            purchase_count: work.purchase_count,
            is_hit: work.is_hit,
            is_new: work.is_new,
        }
    }
}

/// Discrete contribution to a trust score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: TrustFactor,
    pub delta: f64,
    pub notes: String,
}

/// Factors permitted in the trust rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustFactor {
    BaseRating,
    Popularity,
    Hit,
    Novelty,
}

/// Scoring output: rounded composite score, tier, and the component trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustScore {
    pub score: f64,
    pub level: TrustLevel,
    pub components: Vec<ScoreComponent>,
}

impl TrustScore {
    pub fn badge(&self) -> TrustBadge {
        self.level.badge()
    }
}
