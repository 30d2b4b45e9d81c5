use serde::{Deserialize, Serialize};

/// Tier assigned to a clamped composite score, highest threshold first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Elite,
    Verified,
    Good,
    New,
}

// Thresholds are inclusive: a score of exactly 7.5 is Verified, not Good.
const LEVEL_THRESHOLDS: &[(f64, TrustLevel)] = &[
    (9.0, TrustLevel::Elite),
    (7.5, TrustLevel::Verified),
    (6.0, TrustLevel::Good),
];

impl TrustLevel {
    pub(crate) fn for_score(score: f64) -> Self {
        for (threshold, level) in LEVEL_THRESHOLDS {
            if score >= *threshold {
                return *level;
            }
        }
        TrustLevel::New
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrustLevel::Elite => "Элитная работа",
            TrustLevel::Verified => "Проверенная",
            TrustLevel::Good => "Хорошая работа",
            TrustLevel::New => "Новая работа",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            TrustLevel::Elite => "Award",
            TrustLevel::Verified => "ShieldCheck",
            TrustLevel::Good => "ThumbsUp",
            TrustLevel::New => "Sparkles",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            TrustLevel::Elite => "#f59e0b",
            TrustLevel::Verified => "#10b981",
            TrustLevel::Good => "#3b82f6",
            TrustLevel::New => "#94a3b8",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            TrustLevel::Elite => "Высший рейтинг и стабильные продажи",
            TrustLevel::Verified => "Проверена покупателями, высокая оценка",
            TrustLevel::Good => "Хорошие оценки покупателей",
            TrustLevel::New => "Недавно в каталоге, оценок пока мало",
        }
    }

    pub fn badge(self) -> TrustBadge {
        TrustBadge {
            level: self,
            label: self.label(),
            icon: self.icon(),
            color: self.color(),
            description: self.description(),
        }
    }
}

/// Display metadata for a trust level, fixed per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrustBadge {
    pub level: TrustLevel,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(TrustLevel::for_score(9.0), TrustLevel::Elite);
        assert_eq!(TrustLevel::for_score(8.99), TrustLevel::Verified);
        assert_eq!(TrustLevel::for_score(7.5), TrustLevel::Verified);
        assert_eq!(TrustLevel::for_score(7.49), TrustLevel::Good);
        assert_eq!(TrustLevel::for_score(6.0), TrustLevel::Good);
        assert_eq!(TrustLevel::for_score(5.99), TrustLevel::New);
        assert_eq!(TrustLevel::for_score(0.0), TrustLevel::New);
    }

    #[test]
    fn badge_carries_level_metadata() {
        let badge = TrustLevel::Elite.badge();
        assert_eq!(badge.label, "Элитная работа");
        assert_eq!(badge.icon, "Award");
        assert_eq!(badge.color, "#f59e0b");
    }
}
