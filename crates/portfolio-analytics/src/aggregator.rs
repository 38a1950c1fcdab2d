use anyhow::Result;
use chrono::{DateTime, Utc};
use property_store::{InvestmentStore, PropertyDb, PropertyStore};

use crate::models::{InvestmentPosition, PortfolioSummary};

const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Fractional years between `start` and `now`, clamped at zero for
/// investments dated in the future.
pub fn elapsed_years(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let secs = (now - start).num_seconds();
    secs.max(0) as f64 / SECONDS_PER_YEAR
}

/// Aggregates one investor's holdings into account-wide totals.
///
/// The user id is always an explicit parameter: the HTTP layer resolves
/// identity and passes it in, nothing here reads ambient request state.
#[derive(Clone)]
pub struct PortfolioAnalyzer {
    properties: PropertyStore,
    investments: InvestmentStore,
}

impl PortfolioAnalyzer {
    pub fn new(db: PropertyDb) -> Self {
        Self {
            properties: PropertyStore::new(db.clone()),
            investments: InvestmentStore::new(db),
        }
    }

    /// Current value of every counted investment, projected from its
    /// start date to `now`, plus the portfolio totals.
    ///
    /// Per-row problems (missing property, malformed stored rate) skip
    /// that row with a warning instead of failing the whole portfolio.
    pub async fn portfolio_for_user(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<(PortfolioSummary, Vec<InvestmentPosition>)> {
        let investments = self.investments.for_user(user_id).await?;

        let mut positions = Vec::new();
        let mut total_invested = 0.0;
        let mut total_current_value = 0.0;

        for investment in investments {
            if !investment.status.counts_toward_portfolio() {
                continue;
            }

            let property = match self.properties.get(investment.property_id).await? {
                Some(property) => property,
                None => {
                    tracing::warn!(
                        investment_id = ?investment.id,
                        property_id = investment.property_id,
                        "investment references a missing property, skipping"
                    );
                    continue;
                }
            };

            let annual_rate = match roi_engine::parse_rate(&property.target_return_rate) {
                Ok(rate) => rate,
                Err(err) => {
                    tracing::warn!(
                        property_id = investment.property_id,
                        rate = %property.target_return_rate,
                        %err,
                        "stored target rate is unusable, skipping investment"
                    );
                    continue;
                }
            };

            let elapsed = elapsed_years(investment.start_date, now);
            let current_value =
                roi_engine::compound_value(investment.principal, annual_rate, elapsed);

            total_invested += investment.principal;
            total_current_value += current_value;

            positions.push(InvestmentPosition {
                earnings: current_value - investment.principal,
                current_value,
                elapsed_years: elapsed,
                annual_rate,
                property_name: property.name,
                investment,
            });
        }

        if total_invested <= 0.0 {
            return Ok((PortfolioSummary::Empty, positions));
        }

        let total_earnings = total_current_value - total_invested;
        let summary = PortfolioSummary::Aggregated {
            total_invested,
            total_current_value,
            total_earnings,
            portfolio_roi: total_earnings / total_invested * 100.0,
        };

        Ok((summary, positions))
    }
}
