use super::parser::normalize_keywords;
use crate::catalog::domain::Subject;

// Ordered rule list: the first group with a matching keyword wins, so a title
// naming both an electric drive and a machine tool classifies as electrical.
// Reordering entries changes classifications.
const SUBJECT_RULES: &[(Subject, &[&str])] = &[
    (
        Subject::ElectricalPower,
        &[
            "электро",
            "электри",
            "энергоснабжен",
            "подстанц",
            "релейн",
        ],
    ),
    (
        Subject::Automation,
        &[
            "автоматиз",
            "автоматическ",
            "асу",
            "scada",
            "контроллер",
        ],
    ),
    (
        Subject::Construction,
        &[
            "строительств",
            "здани",
            "фундамент",
            "железобетон",
            "реконструкц",
        ],
    ),
    (
        Subject::Mechanics,
        &["механ", "станк", "станок", "редуктор", "балк"],
    ),
    (
        Subject::GasSupply,
        &["газ", "нефт", "месторожден", "скважин"],
    ),
    (
        Subject::Software,
        &[
            "программ",
            "приложени",
            "база данных",
            "информационн",
            "сайт",
        ],
    ),
    (
        Subject::Safety,
        &["безопасност", "охран", "пожар", "чрезвычайн"],
    ),
    (
        Subject::HeatSupply,
        &["тепло", "отоплен", "водоснабжен", "вентиляц", "котельн"],
    ),
    (
        Subject::Transport,
        &["транспорт", "автомобил", "перевозк", "логистик", "дорожн"],
    ),
    (
        Subject::Hydraulics,
        &["гидравл", "гидропривод", "насос", "трубопровод"],
    ),
];

/// Classify a work title into its subject domain; unmatched titles land in
/// general engineering.
pub fn determine_subject(title: &str) -> Subject {
    let haystack = normalize_keywords(title);
    for (subject, keywords) in SUBJECT_RULES {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *subject;
        }
    }
    Subject::GeneralEngineering
}
