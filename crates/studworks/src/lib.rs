//! Core engine for the student-works marketplace.
//!
//! The crate is split into two halves: [`catalog`] holds the live marketplace
//! domain (works, trust scoring, points pricing, service, HTTP router) and
//! [`import`] holds the offline pipeline that turns a cloud-folder listing
//! into classified catalog rows and SQL insert statements.

pub mod catalog;
pub mod config;
pub mod error;
pub mod import;
pub mod telemetry;
