use serde::Serialize;

/// Purchasable points bundle. A fixed storefront table, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsPackage {
    pub id: &'static str,
    pub points: u32,
    pub price_rubles: u32,
    pub bonus: u32,
}

impl PointsPackage {
    /// Points landing on the balance when the package is bought.
    pub const fn credited_points(&self) -> u32 {
        self.points + self.bonus
    }

    pub fn discount_percent(&self) -> u8 {
        discount_percent_for(self.points)
    }
}

pub const POINTS_PACKAGES: &[PointsPackage] = &[
    PointsPackage {
        id: "100",
        points: 100,
        price_rubles: 100,
        bonus: 0,
    },
    PointsPackage {
        id: "600",
        points: 600,
        price_rubles: 550,
        bonus: 50,
    },
    PointsPackage {
        id: "1500",
        points: 1500,
        price_rubles: 1300,
        bonus: 150,
    },
    PointsPackage {
        id: "3000",
        points: 3000,
        price_rubles: 2500,
        bonus: 500,
    },
];

pub fn package_by_id(id: &str) -> Option<&'static PointsPackage> {
    POINTS_PACKAGES.iter().find(|package| package.id == id)
}

// Descending thresholds; the largest threshold at or below the purchased
// amount wins.
const DISCOUNT_TIERS: &[(u32, u8)] = &[(1500, 15), (600, 10), (100, 5)];

/// Storefront discount percentage earned by a points purchase.
pub fn discount_percent_for(points: u32) -> u8 {
    for (threshold, percent) in DISCOUNT_TIERS {
        if points >= *threshold {
            return *percent;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_by_exact_key() {
        let package = package_by_id("600").expect("package exists");
        assert_eq!(package.points, 600);
        assert_eq!(package.credited_points(), 650);
        assert!(package_by_id("601").is_none());
        assert!(package_by_id("").is_none());
    }

    #[test]
    fn discount_uses_largest_threshold_at_or_below() {
        assert_eq!(discount_percent_for(99), 0);
        assert_eq!(discount_percent_for(100), 5);
        assert_eq!(discount_percent_for(599), 5);
        assert_eq!(discount_percent_for(600), 10);
        assert_eq!(discount_percent_for(1499), 10);
        assert_eq!(discount_percent_for(1500), 15);
        assert_eq!(discount_percent_for(3000), 15);
    }

    #[test]
    fn every_package_resolves_its_own_tier() {
        let percents: Vec<u8> = POINTS_PACKAGES
            .iter()
            .map(|package| package.discount_percent())
            .collect();
        assert_eq!(percents, vec![5, 10, 15, 15]);
    }
}
