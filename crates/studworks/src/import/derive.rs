use super::parser::normalize_keywords;

/// Price assigned when no rule recognizes the work type.
pub const DEFAULT_PRICE_POINTS: u32 = 1500;

/// Composition assigned when no rule recognizes the work type.
pub const DEFAULT_COMPOSITION: &str = "Пояснительная записка";

const COURSEWORK_DESIGN_KEYWORDS: &[&str] =
    &["проектирование", "расчет", "модернизация", "разработка"];

const DIPLOMA_PRICE_KEYWORDS: &[&str] = &[
    "модернизация",
    "проектирование системы",
    "разработка",
    "автоматизация",
];

const DIPLOMA_DRAWING_KEYWORDS: &[&str] = &["газопровод", "электро", "система", "модернизация"];

/// A single pricing rule; rules are evaluated top to bottom and the first
/// match wins, making the ordering part of the contract.
struct PriceRule {
    applies: fn(work_type: &str, title: &str) -> bool,
    price_points: u32,
}

const PRICE_RULES: &[PriceRule] = &[
    PriceRule {
        applies: practical_without_report,
        price_points: 1000,
    },
    PriceRule {
        applies: practice_report,
        price_points: 1500,
    },
    PriceRule {
        applies: coursework_with_design,
        price_points: 2200,
    },
    PriceRule {
        applies: coursework,
        price_points: 1800,
    },
    PriceRule {
        applies: diploma_with_trigger,
        price_points: 6000,
    },
    PriceRule {
        applies: diploma,
        price_points: 5000,
    },
    PriceRule {
        applies: referat,
        price_points: 1200,
    },
    PriceRule {
        applies: test_paper,
        price_points: 1500,
    },
];

/// Derive the catalog price in points from the work type and title. This is
/// the single price table; the catalog stores the result and never
/// re-derives it.
pub fn determine_price(work_type: &str, title: &str) -> u32 {
    let work_type = normalize_keywords(work_type);
    let title = normalize_keywords(title);

    for rule in PRICE_RULES {
        if (rule.applies)(&work_type, &title) {
            return rule.price_points;
        }
    }

    DEFAULT_PRICE_POINTS
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn practical_without_report(work_type: &str, _title: &str) -> bool {
    (work_type.contains("практическая") || work_type.contains("практика"))
        && !work_type.contains("отчет")
}

fn practice_report(work_type: &str, _title: &str) -> bool {
    work_type.contains("отчет") && work_type.contains("практ")
}

fn coursework(work_type: &str, _title: &str) -> bool {
    work_type.contains("курсовая") || work_type.contains("курсовой")
}

fn coursework_with_design(work_type: &str, title: &str) -> bool {
    coursework(work_type, title) && contains_any(title, COURSEWORK_DESIGN_KEYWORDS)
}

fn diploma(work_type: &str, _title: &str) -> bool {
    work_type.contains("диплом")
}

fn diploma_with_trigger(work_type: &str, title: &str) -> bool {
    diploma(work_type, title) && contains_any(title, DIPLOMA_PRICE_KEYWORDS)
}

fn referat(work_type: &str, _title: &str) -> bool {
    work_type.contains("реферат")
}

fn test_paper(work_type: &str, _title: &str) -> bool {
    work_type.contains("контрольная")
}

/// A composition rule mirrors the price-rule shape: ordered, first match
/// wins.
struct CompositionRule {
    applies: fn(work_type: &str, title: &str) -> bool,
    composition: &'static str,
}

const COMPOSITION_RULES: &[CompositionRule] = &[
    CompositionRule {
        applies: diploma_with_drawings,
        composition: "Пояснительная записка, графика, чертежи",
    },
    CompositionRule {
        applies: diploma,
        composition: "Пояснительная записка, графика",
    },
    CompositionRule {
        applies: coursework_with_design,
        composition: "Пояснительная записка, чертежи",
    },
    CompositionRule {
        applies: coursework,
        composition: "Пояснительная записка",
    },
    CompositionRule {
        applies: practice_like,
        composition: "Отчёт, дневник практики",
    },
];

/// Derive the deliverable-contents description for a work.
pub fn determine_composition(work_type: &str, title: &str) -> &'static str {
    let work_type = normalize_keywords(work_type);
    let title = normalize_keywords(title);

    for rule in COMPOSITION_RULES {
        if (rule.applies)(&work_type, &title) {
            return rule.composition;
        }
    }

    DEFAULT_COMPOSITION
}

fn diploma_with_drawings(work_type: &str, title: &str) -> bool {
    diploma(work_type, title) && contains_any(title, DIPLOMA_DRAWING_KEYWORDS)
}

fn practice_like(work_type: &str, _title: &str) -> bool {
    work_type.contains("практ") || work_type.contains("отчет")
}
