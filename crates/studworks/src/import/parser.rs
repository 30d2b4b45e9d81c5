use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::domain::UNKNOWN_WORK_TYPE;

/// Title/type pair extracted from a raw folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInfo {
    pub title: String,
    pub work_type: String,
}

static WORK_INFO_RE: OnceLock<Regex> = OnceLock::new();
static UNIVERSITY_RE: OnceLock<Regex> = OnceLock::new();

fn work_info_re() -> &'static Regex {
    // Greedy prefix, so the captured group is the LAST parenthesized group at
    // the end of the name.
    WORK_INFO_RE
        .get_or_init(|| Regex::new(r"^(.*\S)\s*\(([^()]+)\)\s*$").expect("static pattern compiles"))
}

fn university_re() -> &'static Regex {
    UNIVERSITY_RE.get_or_init(|| {
        Regex::new(r#"\b(ООО|ПАО|ОАО|ЗАО|АО)\s*[«"]([^«»"]+)[»"]"#)
            .expect("static pattern compiles")
    })
}

/// Split a folder name into a title and the parenthesized work type.
///
/// Falls back to the whole name with the unknown-type marker when the name
/// carries no trailing parenthesized group. Idempotent on its own output
/// title.
pub fn extract_work_info(folder_name: &str) -> WorkInfo {
    if let Some(caps) = work_info_re().captures(folder_name.trim()) {
        let title = caps[1].trim().to_string();
        let work_type = caps[2].trim().to_string();
        if !title.is_empty() && !work_type.is_empty() {
            return WorkInfo { title, work_type };
        }
    }

    WorkInfo {
        title: folder_name.trim().to_string(),
        work_type: UNKNOWN_WORK_TYPE.to_string(),
    }
}

/// Pick out a customer organization: a Russian legal-entity prefix followed
/// by a quoted name.
pub fn extract_university(title: &str) -> Option<String> {
    university_re()
        .find(title)
        .map(|matched| matched.as_str().trim().to_string())
}

/// Lowercase with `ё` folded to `е`, the normalization every keyword rule
/// matches against.
pub(crate) fn normalize_keywords(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_title_and_parenthesized_type() {
        let info = extract_work_info("Расчёт балки (курсовая работа)");
        assert_eq!(info.title, "Расчёт балки");
        assert_eq!(info.work_type, "курсовая работа");
    }

    #[test]
    fn falls_back_without_parentheses() {
        let info = extract_work_info("Безымянная папка");
        assert_eq!(info.title, "Безымянная папка");
        assert_eq!(info.work_type, UNKNOWN_WORK_TYPE);
    }

    #[test]
    fn last_group_wins_when_the_title_contains_parentheses() {
        let info = extract_work_info("Модернизация АСУ (цех №2) (дипломная работа)");
        assert_eq!(info.title, "Модернизация АСУ (цех №2)");
        assert_eq!(info.work_type, "дипломная работа");
    }

    #[test]
    fn blank_parenthesized_group_falls_back() {
        let info = extract_work_info("Отчёт по практике (   )");
        assert_eq!(info.title, "Отчёт по практике (   )");
        assert_eq!(info.work_type, UNKNOWN_WORK_TYPE);
    }

    #[test]
    fn extraction_is_idempotent_on_its_own_title() {
        let first = extract_work_info("Расчёт балки (курсовая работа)");
        let second = extract_work_info(&first.title);
        assert_eq!(second.title, first.title);
        assert_eq!(second.work_type, UNKNOWN_WORK_TYPE);
    }

    #[test]
    fn finds_quoted_legal_entities() {
        assert_eq!(
            extract_university("Модернизация подстанции ООО «Энергосеть»"),
            Some("ООО «Энергосеть»".to_string())
        );
        assert_eq!(
            extract_university("Практика в АО \"Трансгаз\""),
            Some("АО \"Трансгаз\"".to_string())
        );
        assert_eq!(extract_university("Расчёт балки"), None);
    }

    #[test]
    fn legal_prefix_requires_a_word_boundary() {
        assert_eq!(extract_university("САО «Не юрлицо»"), None);
    }

    #[test]
    fn keyword_normalization_folds_yo() {
        assert_eq!(normalize_keywords("Расчёт ОТЧЁТ"), "расчет отчет");
    }
}
