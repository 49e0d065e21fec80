//! pathfit-core — Career-fit scoring engine, catalogs, and reports.
//!
//! This crate defines the question and answer model, catalog loading and
//! validation, the deterministic scoring engine, and the report types that
//! the `pathfit` CLI builds on.

pub mod aggregate;
pub mod answers;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod guidance;
pub mod insights;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;

pub use answers::AnswerSet;
pub use catalog::Catalog;
pub use engine::{evaluate, ScoringEngine};
pub use error::{CatalogError, ScoringError};
pub use model::{AssessmentResult, Recommendation};
