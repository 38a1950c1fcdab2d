//! Portfolio aggregation and cross-property comparison.
//!
//! Sits between the store and the HTTP layer: fetches rows, runs the
//! roi-engine math, and produces the account-wide and comparative views
//! the dashboards render.

pub mod aggregator;
pub mod comparator;
pub mod models;

pub use aggregator::{elapsed_years, PortfolioAnalyzer};
pub use comparator::PropertyComparator;
pub use models::{InvestmentPosition, PortfolioSummary, PropertyComparison};
