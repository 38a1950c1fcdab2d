//! Pure ROI arithmetic for property crowdfunding projections.
//!
//! Stateless f64 math — no DB, no async. Every projection surface
//! (property ROI, portfolio aggregation, comparison, forecasting) goes
//! through this one crate so the interest formulas cannot drift apart.

pub mod error;
pub mod forecast;
pub mod rates;
pub mod returns;
pub mod schedule;

pub use error::RoiError;
pub use forecast::{forecast, Forecast, ScenarioOverrides, ScenarioProjection};
pub use rates::parse_rate;
pub use returns::{annualized_return, compound_return, compound_value, simple_return};
pub use schedule::{monthly_schedule, MonthlyPoint};
