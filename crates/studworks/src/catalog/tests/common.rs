use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::catalog::domain::{BuyerId, CatalogWork, Subject, WorkId, WorkSubmission};
use crate::catalog::repository::{
    CatalogRepository, LedgerError, PointsLedger, RepositoryError,
};
use crate::catalog::service::MarketplaceService;
use crate::catalog::trust::TrustConfig;
use crate::catalog::catalog_router;

pub(super) fn published_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

pub(super) fn submission() -> WorkSubmission {
    WorkSubmission {
        title: "Расчёт балки".to_string(),
        work_type: "курсовая работа".to_string(),
        subject: Subject::Mechanics,
        description: "Курсовая работа по теме «Расчёт балки».".to_string(),
        composition: "Пояснительная записка".to_string(),
        university: None,
        price_points: 1800,
        rating: 4.5,
        purchase_count: 12,
        is_hit: false,
        is_new: false,
        discount_percent: None,
        storage_link: None,
        published_on: published_on(),
    }
}

pub(super) fn hit_submission() -> WorkSubmission {
    let mut hit = submission();
    hit.title = "Автоматизация процесса сварки".to_string();
    hit.work_type = "дипломная работа".to_string();
    hit.subject = Subject::Automation;
    hit.price_points = 6000;
    hit.rating = 5.0;
    hit.purchase_count = 120;
    hit.is_hit = true;
    hit
}

pub(super) fn build_service() -> (
    MarketplaceService<MemoryCatalog, MemoryLedger>,
    Arc<MemoryCatalog>,
    Arc<MemoryLedger>,
) {
    let repository = Arc::new(MemoryCatalog::default());
    let ledger = Arc::new(MemoryLedger::default());
    let service =
        MarketplaceService::new(repository.clone(), ledger.clone(), TrustConfig::default());
    (service, repository, ledger)
}

pub(super) fn catalog_router_with_service(
    service: MarketplaceService<MemoryCatalog, MemoryLedger>,
) -> axum::Router {
    catalog_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryCatalog {
    pub(super) works: Arc<Mutex<HashMap<WorkId, CatalogWork>>>,
}

impl CatalogRepository for MemoryCatalog {
    fn insert(&self, work: CatalogWork) -> Result<CatalogWork, RepositoryError> {
        let mut guard = self.works.lock().expect("catalog mutex poisoned");
        if guard.contains_key(&work.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(work.id.clone(), work.clone());
        Ok(work)
    }

    fn update(&self, work: CatalogWork) -> Result<(), RepositoryError> {
        let mut guard = self.works.lock().expect("catalog mutex poisoned");
        if guard.contains_key(&work.id) {
            guard.insert(work.id.clone(), work);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &WorkId) -> Result<Option<CatalogWork>, RepositoryError> {
        let guard = self.works.lock().expect("catalog mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<CatalogWork>, RepositoryError> {
        let guard = self.works.lock().expect("catalog mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLedger {
    balances: Arc<Mutex<HashMap<BuyerId, u32>>>,
}

impl PointsLedger for MemoryLedger {
    fn balance(&self, buyer: &BuyerId) -> Result<u32, LedgerError> {
        let guard = self.balances.lock().expect("ledger mutex poisoned");
        Ok(guard.get(buyer).copied().unwrap_or(0))
    }

    fn credit(&self, buyer: &BuyerId, amount: u32) -> Result<u32, LedgerError> {
        let mut guard = self.balances.lock().expect("ledger mutex poisoned");
        let balance = guard.entry(buyer.clone()).or_insert(0);
        *balance += amount;
        Ok(*balance)
    }

    fn debit(&self, buyer: &BuyerId, amount: u32) -> Result<u32, LedgerError> {
        let mut guard = self.balances.lock().expect("ledger mutex poisoned");
        let balance = guard.entry(buyer.clone()).or_insert(0);
        if *balance < amount {
            return Err(LedgerError::InsufficientPoints {
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(*balance)
    }
}

pub(super) struct UnavailableCatalog;

impl CatalogRepository for UnavailableCatalog {
    fn insert(&self, _work: CatalogWork) -> Result<CatalogWork, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _work: CatalogWork) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &WorkId) -> Result<Option<CatalogWork>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<CatalogWork>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Accepts fetches but rejects updates, for exercising the purchase refund
/// path.
pub(super) struct ReadOnlyCatalog {
    pub(super) inner: MemoryCatalog,
}

impl CatalogRepository for ReadOnlyCatalog {
    fn insert(&self, work: CatalogWork) -> Result<CatalogWork, RepositoryError> {
        self.inner.insert(work)
    }

    fn update(&self, _work: CatalogWork) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, id: &WorkId) -> Result<Option<CatalogWork>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn list(&self) -> Result<Vec<CatalogWork>, RepositoryError> {
        self.inner.list()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
