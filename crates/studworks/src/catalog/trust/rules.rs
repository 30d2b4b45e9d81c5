use super::config::TrustConfig;
use super::{ScoreComponent, TrustFactor, TrustInput};

pub(crate) fn score_components(
    input: &TrustInput,
    config: &TrustConfig,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut total = 0.0;

    let base = input.rating * config.rating_weight;
    components.push(ScoreComponent {
        factor: TrustFactor::BaseRating,
        delta: base,
        notes: format!(
            "rating {:.1} weighted x{:.1}",
            input.rating, config.rating_weight
        ),
    });
    total += base;

    if input.purchase_count > 0 {
        let tier = config
            .purchase_tiers
            .iter()
            .find(|tier| input.purchase_count >= tier.min_purchases);
        let (bonus, notes) = match tier {
            Some(tier) => (
                tier.bonus,
                format!(
                    "{} purchases reach the {}+ tier",
                    input.purchase_count, tier.min_purchases
                ),
            ),
            None => (
                f64::from(input.purchase_count) * config.per_purchase_bonus,
                format!(
                    "{} purchases below the first tier, {:.2} each",
                    input.purchase_count, config.per_purchase_bonus
                ),
            ),
        };
        components.push(ScoreComponent {
            factor: TrustFactor::Popularity,
            delta: bonus,
            notes,
        });
        total += bonus;
    }

    if input.is_hit {
        components.push(ScoreComponent {
            factor: TrustFactor::Hit,
            delta: config.hit_bonus,
            notes: "marketplace hit flag".to_string(),
        });
        total += config.hit_bonus;
    }

    if input.is_new {
        components.push(ScoreComponent {
            factor: TrustFactor::Novelty,
            delta: config.novelty_bonus,
            notes: "recently published".to_string(),
        });
        total += config.novelty_bonus;
    }

    (components, total)
}
