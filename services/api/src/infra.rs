use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use studworks::catalog::{
    BuyerId, CatalogRepository, CatalogWork, LedgerError, PointsLedger, RepositoryError,
    TrustConfig, WorkId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) sql_schema: Arc<String>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalogRepository {
    works: Arc<Mutex<HashMap<WorkId, CatalogWork>>>,
}

impl CatalogRepository for InMemoryCatalogRepository {
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
pub(crate) struct InMemoryPointsLedger {
    balances: Arc<Mutex<HashMap<BuyerId, u32>>>,
}

impl PointsLedger for InMemoryPointsLedger {
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

pub(crate) fn default_trust_config() -> TrustConfig {
    TrustConfig::default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
