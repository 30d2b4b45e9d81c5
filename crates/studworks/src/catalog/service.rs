use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::domain::{BuyerId, CatalogWork, DomainError, WorkId, WorkSubmission};
use super::points::{package_by_id, PointsPackage, POINTS_PACKAGES};
use super::repository::{
    CatalogRepository, LedgerError, PointsLedger, PurchaseReceipt, RepositoryError, TopUpReceipt,
};
use super::trust::{TrustBadge, TrustConfig, TrustEngine, TrustScore};

/// Service composing the catalog repository, points ledger, and trust engine.
pub struct MarketplaceService<R, L> {
    repository: Arc<R>,
    ledger: Arc<L>,
    engine: Arc<TrustEngine>,
}

static WORK_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_work_id() -> WorkId {
    let id = WORK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    WorkId(format!("work-{id:06}"))
}

impl<R, L> MarketplaceService<R, L>
where
    R: CatalogRepository + 'static,
    L: PointsLedger + 'static,
{
    pub fn new(repository: Arc<R>, ledger: Arc<L>, config: TrustConfig) -> Self {
        Self {
            repository,
            ledger,
            engine: Arc::new(TrustEngine::new(config)),
        }
    }

    /// Validate and publish a work, returning the stored record.
    pub fn publish(&self, submission: WorkSubmission) -> Result<CatalogWork, MarketplaceError> {
        let work = CatalogWork::from_submission(next_work_id(), submission)?;
        let stored = self.repository.insert(work)?;
        info!(work_id = %stored.id.0, subject = stored.subject.label(), "work published");
        Ok(stored)
    }

    /// Catalog listing with trust scores attached.
    pub fn list(&self) -> Result<Vec<CatalogWorkView>, MarketplaceError> {
        let mut views: Vec<CatalogWorkView> = self
            .repository
            .list()?
            .into_iter()
            .map(|work| self.view(work))
            .collect();
        views.sort_by(|a, b| {
            b.trust
                .score
                .partial_cmp(&a.trust.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(views)
    }

    pub fn get(&self, id: &WorkId) -> Result<CatalogWorkView, MarketplaceError> {
        let work = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(self.view(work))
    }

    /// Spend points on a work: debit the effective price, then record the
    /// sale on the work itself.
    pub fn purchase(
        &self,
        buyer: &BuyerId,
        id: &WorkId,
        today: NaiveDate,
    ) -> Result<PurchaseReceipt, MarketplaceError> {
        let mut work = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        let price = work.effective_price();

        let balance_after = self.ledger.debit(buyer, price)?;

        work.purchase_count += 1;
        if let Err(err) = self.repository.update(work) {
            // The debit already happened; give the points back before
            // surfacing the failure.
            let _ = self.ledger.credit(buyer, price);
            return Err(err.into());
        }

        info!(work_id = %id.0, buyer = %buyer.0, points = price, "work purchased");

        Ok(PurchaseReceipt {
            work_id: id.clone(),
            buyer_id: buyer.clone(),
            points_spent: price,
            balance_after,
            purchased_on: today,
        })
    }

    /// Credit a points package (base points plus bonus) to the buyer.
    pub fn top_up(
        &self,
        buyer: &BuyerId,
        package_id: &str,
    ) -> Result<TopUpReceipt, MarketplaceError> {
        let package = package_by_id(package_id)
            .ok_or_else(|| MarketplaceError::UnknownPackage(package_id.to_string()))?;
        let balance_after = self.ledger.credit(buyer, package.credited_points())?;

        info!(buyer = %buyer.0, package = package.id, credited = package.credited_points(), "points purchased");

        Ok(TopUpReceipt {
            buyer_id: buyer.clone(),
            package_id: package.id.to_string(),
            credited_points: package.credited_points(),
            balance_after,
        })
    }

    pub fn balance(&self, buyer: &BuyerId) -> Result<u32, MarketplaceError> {
        Ok(self.ledger.balance(buyer)?)
    }

    pub fn packages(&self) -> &'static [PointsPackage] {
        POINTS_PACKAGES
    }

    fn view(&self, work: CatalogWork) -> CatalogWorkView {
        let trust = self.engine.score_work(&work);
        CatalogWorkView {
            badge: trust.badge(),
            effective_price: work.effective_price(),
            trust,
            work,
        }
    }
}

/// Catalog entry as the API exposes it: the work, its discounted price, and
/// the derived trust score with display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogWorkView {
    #[serde(flatten)]
    pub work: CatalogWork,
    pub effective_price: u32,
    pub trust: TrustScore,
    pub badge: TrustBadge,
}

/// Error raised by the marketplace service.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("unknown points package '{0}'")]
    UnknownPackage(String),
}
