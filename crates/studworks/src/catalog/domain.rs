use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for published catalog works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkId(pub String);

/// Identifier wrapper for marketplace accounts holding a points balance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyerId(pub String);

/// Closed set of subject domains the classifier can assign.
///
/// Serialized as the Russian catalog label so API payloads and generated SQL
/// carry the same closed label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "электроэнергетика")]
    ElectricalPower,
    #[serde(rename = "автоматизация")]
    Automation,
    #[serde(rename = "строительство")]
    Construction,
    #[serde(rename = "механика")]
    Mechanics,
    #[serde(rename = "газоснабжение")]
    GasSupply,
    #[serde(rename = "программирование")]
    Software,
    #[serde(rename = "безопасность")]
    Safety,
    #[serde(rename = "теплоснабжение")]
    HeatSupply,
    #[serde(rename = "транспорт")]
    Transport,
    #[serde(rename = "гидравлика")]
    Hydraulics,
    #[serde(rename = "общая инженерия")]
    GeneralEngineering,
}

impl Subject {
    pub const fn label(self) -> &'static str {
        match self {
            Subject::ElectricalPower => "электроэнергетика",
            Subject::Automation => "автоматизация",
            Subject::Construction => "строительство",
            Subject::Mechanics => "механика",
            Subject::GasSupply => "газоснабжение",
            Subject::Software => "программирование",
            Subject::Safety => "безопасность",
            Subject::HeatSupply => "теплоснабжение",
            Subject::Transport => "транспорт",
            Subject::Hydraulics => "гидравлика",
            Subject::GeneralEngineering => "общая инженерия",
        }
    }
}

/// Fallback work type assigned when a folder name carries no parenthesized
/// type marker.
pub const UNKNOWN_WORK_TYPE: &str = "неизвестный тип";

/// Fields accepted for publication, before invariants are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSubmission {
    pub title: String,
    pub work_type: String,
    pub subject: Subject,
    pub description: String,
    pub composition: String,
    #[serde(default)]
    pub university: Option<String>,
    pub price_points: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub purchase_count: u32,
    #[serde(default)]
    pub is_hit: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub discount_percent: Option<u8>,
    #[serde(default)]
    pub storage_link: Option<String>,
    pub published_on: NaiveDate,
}

/// A published work as the catalog projects it. Never mutated by scoring;
/// only `purchase_count` moves, through the marketplace service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogWork {
    pub id: WorkId,
    pub title: String,
    pub work_type: String,
    pub subject: Subject,
    pub description: String,
    pub composition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    pub price_points: u32,
    pub rating: f64,
    pub purchase_count: u32,
    pub is_hit: bool,
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_link: Option<String>,
    pub published_on: NaiveDate,
}

impl CatalogWork {
    /// Validate a submission and mint the catalog record.
    pub fn from_submission(id: WorkId, submission: WorkSubmission) -> Result<Self, DomainError> {
        if submission.title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if submission.price_points == 0 {
            return Err(DomainError::PriceNotPositive);
        }
        if !(0.0..=5.0).contains(&submission.rating) {
            return Err(DomainError::RatingOutOfRange {
                rating: submission.rating,
            });
        }
        if let Some(discount) = submission.discount_percent {
            if discount > MAX_DISCOUNT_PERCENT {
                return Err(DomainError::DiscountTooDeep { discount });
            }
        }

        let work_type = if submission.work_type.trim().is_empty() {
            UNKNOWN_WORK_TYPE.to_string()
        } else {
            submission.work_type
        };

        Ok(Self {
            id,
            title: submission.title,
            work_type,
            subject: submission.subject,
            description: submission.description,
            composition: submission.composition,
            university: submission.university,
            price_points: submission.price_points,
            rating: submission.rating,
            purchase_count: submission.purchase_count,
            is_hit: submission.is_hit,
            is_new: submission.is_new,
            discount_percent: submission.discount_percent,
            storage_link: submission.storage_link,
            published_on: submission.published_on,
        })
    }

    /// Price after the per-work discount, floored so a discount never rounds
    /// back up.
    pub fn effective_price(&self) -> u32 {
        match self.discount_percent {
            Some(discount) => self.price_points * (100 - u32::from(discount)) / 100,
            None => self.price_points,
        }
    }
}

const MAX_DISCOUNT_PERCENT: u8 = 90;

/// Invariant violations rejected at publication time.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DomainError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("price_points must be positive")]
    PriceNotPositive,
    #[error("rating {rating} outside the 0..=5 scale")]
    RatingOutOfRange { rating: f64 },
    #[error("discount {discount}% exceeds the 90% ceiling")]
    DiscountTooDeep { discount: u8 },
}
