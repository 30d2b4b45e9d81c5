use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{BuyerId, CatalogWork, WorkId};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait CatalogRepository: Send + Sync {
    fn insert(&self, work: CatalogWork) -> Result<CatalogWork, RepositoryError>;
    fn update(&self, work: CatalogWork) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &WorkId) -> Result<Option<CatalogWork>, RepositoryError>;
    fn list(&self) -> Result<Vec<CatalogWork>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("work already exists")]
    Conflict,
    #[error("work not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Points balance store. Debits are atomic per buyer: a failed debit leaves
/// the balance untouched.
pub trait PointsLedger: Send + Sync {
    fn balance(&self, buyer: &BuyerId) -> Result<u32, LedgerError>;
    fn credit(&self, buyer: &BuyerId, amount: u32) -> Result<u32, LedgerError>;
    fn debit(&self, buyer: &BuyerId, amount: u32) -> Result<u32, LedgerError>;
}

/// Error enumeration for ledger failures.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient points: need {required}, have {available}")]
    InsufficientPoints { required: u32, available: u32 },
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Receipt returned to the buyer after a catalog purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseReceipt {
    pub work_id: WorkId,
    pub buyer_id: BuyerId,
    pub points_spent: u32,
    pub balance_after: u32,
    pub purchased_on: NaiveDate,
}

/// Receipt returned after a points package purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopUpReceipt {
    pub buyer_id: BuyerId,
    pub package_id: String,
    pub credited_points: u32,
    pub balance_after: u32,
}
