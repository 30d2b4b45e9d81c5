//! Offline import pipeline: a cloud-folder listing export goes in, classified
//! catalog rows and SQL insert statements come out.

mod classify;
mod derive;
mod parser;
mod sql;

pub use classify::determine_subject;
pub use derive::{determine_composition, determine_price, DEFAULT_COMPOSITION, DEFAULT_PRICE_POINTS};
pub use parser::{extract_university, extract_work_info, WorkInfo};
pub use sql::{insert_statement, sql_script};

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::domain::{Subject, WorkSubmission};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One folder of the listing after classification, ready for SQL emission or
/// direct publication.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedWork {
    pub title: String,
    pub work_type: String,
    pub subject: Subject,
    pub description: String,
    pub composition: String,
    pub university: Option<String>,
    pub price_points: u32,
    pub storage_link: Option<String>,
}

impl ImportedWork {
    /// Run the whole classifier chain over one raw folder name.
    pub fn from_folder_name(folder_name: &str, storage_link: Option<String>) -> Self {
        let WorkInfo { title, work_type } = extract_work_info(folder_name);
        let subject = determine_subject(&title);
        let price_points = determine_price(&work_type, &title);
        let composition = determine_composition(&work_type, &title).to_string();
        let university = extract_university(&title);
        let description = build_description(&work_type, subject, &title);

        Self {
            title,
            work_type,
            subject,
            description,
            composition,
            university,
            price_points,
            storage_link,
        }
    }

    /// Bridge into the catalog: imported works start unrated and flagged as
    /// new.
    pub fn into_submission(self, published_on: NaiveDate) -> WorkSubmission {
        WorkSubmission {
            title: self.title,
            work_type: self.work_type,
            subject: self.subject,
            description: self.description,
            composition: self.composition,
            university: self.university,
            price_points: self.price_points,
            rating: 0.0,
            purchase_count: 0,
            is_hit: false,
            is_new: true,
            discount_percent: None,
            storage_link: self.storage_link,
            published_on,
        }
    }
}

fn build_description(work_type: &str, subject: Subject, title: &str) -> String {
    format!(
        "{} по теме «{}». Направление: {}.",
        capitalize(work_type),
        title,
        subject.label()
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Reads a folder-listing CSV export (`Name`, optional `Public URL`) and
/// classifies every row.
pub struct ListingImporter;

impl ListingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedWork>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedWork>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut works = Vec::new();

        for record in csv_reader.deserialize::<ListingRow>() {
            let row = record?;
            if row.name.is_empty() {
                continue;
            }
            works.push(ImportedWork::from_folder_name(&row.name, row.public_url));
        }

        Ok(works)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(
        rename = "Public URL",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    public_url: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::UNKNOWN_WORK_TYPE;
    use std::io::Cursor;

    #[test]
    fn classifies_the_welding_automation_diploma() {
        let work =
            ImportedWork::from_folder_name("Автоматизация процесса сварки (дипломная работа)", None);

        assert_eq!(work.title, "Автоматизация процесса сварки");
        assert_eq!(work.work_type, "дипломная работа");
        assert_eq!(work.subject, Subject::Automation);
        assert_eq!(work.price_points, 6000);
        assert_eq!(work.composition, "Пояснительная записка, графика");
        assert_eq!(work.university, None);
        assert_eq!(
            work.description,
            "Дипломная работа по теме «Автоматизация процесса сварки». Направление: автоматизация."
        );
    }

    #[test]
    fn unnamed_folders_keep_the_full_name_and_defaults() {
        let work = ImportedWork::from_folder_name("Безымянная папка", None);

        assert_eq!(work.title, "Безымянная папка");
        assert_eq!(work.work_type, UNKNOWN_WORK_TYPE);
        assert_eq!(work.subject, Subject::GeneralEngineering);
        assert_eq!(work.price_points, DEFAULT_PRICE_POINTS);
        assert_eq!(work.composition, DEFAULT_COMPOSITION);
    }

    #[test]
    fn importer_reads_rows_and_keeps_links() {
        let csv = "Name,Public URL\n\
Расчёт балки (курсовая работа),https://disk.example/d/beam\n\
Автоматизация процесса сварки (дипломная работа),\n";

        let works = ListingImporter::from_reader(Cursor::new(csv)).expect("listing parses");
        assert_eq!(works.len(), 2);
        assert_eq!(
            works[0].storage_link.as_deref(),
            Some("https://disk.example/d/beam")
        );
        assert_eq!(works[0].price_points, 2200);
        assert!(works[1].storage_link.is_none());
    }

    #[test]
    fn importer_skips_blank_names() {
        let csv = "Name,Public URL\n,\nРеферат по охране труда (реферат),\n";
        let works = ListingImporter::from_reader(Cursor::new(csv)).expect("listing parses");
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].price_points, 1200);
        assert_eq!(works[0].subject, Subject::Safety);
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error =
            ListingImporter::from_path("./does-not-exist.csv").expect_err("expected io error");
        match error {
            ImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn imported_work_bridges_into_a_fresh_submission() {
        let work = ImportedWork::from_folder_name("Расчёт балки (курсовая работа)", None);
        let submission =
            work.into_submission(NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"));

        assert_eq!(submission.rating, 0.0);
        assert_eq!(submission.purchase_count, 0);
        assert!(submission.is_new);
        assert_eq!(submission.price_points, 2200);
    }
}
