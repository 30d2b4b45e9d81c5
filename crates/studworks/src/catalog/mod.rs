//! Live marketplace domain: works, trust scoring, points pricing, and the
//! service/router pair the HTTP API is built from.

pub mod domain;
pub mod points;
pub mod repository;
pub mod router;
pub mod service;
pub mod trust;

#[cfg(test)]
mod tests;

pub use domain::{BuyerId, CatalogWork, DomainError, Subject, WorkId, WorkSubmission};
pub use points::{discount_percent_for, package_by_id, PointsPackage, POINTS_PACKAGES};
pub use repository::{
    CatalogRepository, LedgerError, PointsLedger, PurchaseReceipt, RepositoryError, TopUpReceipt,
};
pub use router::catalog_router;
pub use service::{CatalogWorkView, MarketplaceError, MarketplaceService};
pub use trust::{
    compute_trust_score, PurchaseTier, ScoreComponent, TrustBadge, TrustConfig, TrustEngine,
    TrustFactor, TrustInput, TrustLevel, TrustScore,
};
