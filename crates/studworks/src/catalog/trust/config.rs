use serde::{Deserialize, Serialize};

/// Weight table for the composite trust score.
///
/// The defaults are the production constants; they are configuration so the
/// rubric can be tuned without touching the scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustConfig {
    /// Multiplier applied to the 0-5 buyer rating.
    pub rating_weight: f64,
    /// Flat bonus for works flagged as marketplace hits.
    pub hit_bonus: f64,
    /// Flat bonus for freshly published works.
    pub novelty_bonus: f64,
    /// Per-purchase bonus below the first tier threshold.
    pub per_purchase_bonus: f64,
    /// Hand-tuned purchase-count tiers, highest threshold first.
    pub purchase_tiers: Vec<PurchaseTier>,
    /// Ceiling the composite score is clamped to.
    pub max_score: f64,
}

/// A single purchase-count tier: `min_purchases` or more earns `bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseTier {
    pub min_purchases: u32,
    pub bonus: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            rating_weight: 1.5,
            hit_bonus: 1.5,
            novelty_bonus: 0.5,
            per_purchase_bonus: 0.15,
            purchase_tiers: vec![
                PurchaseTier {
                    min_purchases: 100,
                    bonus: 3.0,
                },
                PurchaseTier {
                    min_purchases: 50,
                    bonus: 2.5,
                },
                PurchaseTier {
                    min_purchases: 20,
                    bonus: 2.0,
                },
                PurchaseTier {
                    min_purchases: 10,
                    bonus: 1.5,
                },
            ],
            max_score: 10.0,
        }
    }
}
