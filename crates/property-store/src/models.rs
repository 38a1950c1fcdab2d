use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A property open for crowdfunding. The ROI logic only reads these rows;
/// funding progress fields are carried for display, not for return math.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    /// Stored as entered by the back office, e.g. "12.5%". Always parsed
    /// through roi_engine::parse_rate before any arithmetic.
    pub target_return_rate: String,
    pub funding_goal: f64,
    pub funded_amount: f64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub name: String,
    pub location: String,
    pub target_return_rate: String,
    pub funding_goal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    Refunded,
}

impl InvestmentStatus {
    /// Cancelled money was never deployed and refunded money came back;
    /// everything else still represents deployed principal.
    pub fn counts_toward_portfolio(self) -> bool {
        !matches!(
            self,
            InvestmentStatus::Cancelled | InvestmentStatus::Refunded
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Option<i64>,
    pub property_id: i64,
    pub user_id: i64,
    pub principal: f64,
    pub start_date: DateTime<Utc>,
    pub status: InvestmentStatus,
    /// Earnings already credited by the platform, if any.
    pub accrued_earnings: Option<f64>,
    /// Serialized monthly-returns series written by the platform; opaque
    /// to the ROI logic.
    pub monthly_returns: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub property_id: i64,
    pub user_id: i64,
    pub principal: f64,
    pub start_date: DateTime<Utc>,
    pub status: InvestmentStatus,
}
