use property_store::{Investment, Property};
use serde::Serialize;

/// Account-wide totals for one investor.
///
/// Discriminated on purpose: with zero counted investments there is no
/// denominator for the ROI percentage, so the empty case is its own
/// variant instead of a division by zero.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PortfolioSummary {
    Empty,
    Aggregated {
        total_invested: f64,
        total_current_value: f64,
        total_earnings: f64,
        portfolio_roi: f64,
    },
}

/// One investment's contribution to the portfolio view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPosition {
    pub investment: Investment,
    pub property_name: String,
    pub annual_rate: f64,
    pub elapsed_years: f64,
    pub current_value: f64,
    pub earnings: f64,
}

/// Projected figures for one property under fixed terms.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyComparison {
    pub property: Property,
    pub annual_rate: f64,
    pub simple_return: f64,
    pub compound_return: f64,
    pub annualized_return: f64,
    pub total_value: f64,
}
