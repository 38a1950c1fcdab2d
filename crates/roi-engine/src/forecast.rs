use serde::{Deserialize, Serialize};

use crate::returns::{compound_return, compound_value};
use crate::schedule::{monthly_schedule, MonthlyPoint};

/// Default scenario scaling around the property's advertised rate.
pub const PESSIMISTIC_FACTOR: f64 = 0.7;
pub const OPTIMISTIC_FACTOR: f64 = 1.3;

/// Caller-supplied rate overrides; any scenario left as `None` falls back
/// to the derived default.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ScenarioOverrides {
    pub pessimistic: Option<f64>,
    pub realistic: Option<f64>,
    pub optimistic: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioProjection {
    pub annual_rate: f64,
    pub total_earnings: f64,
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub pessimistic: ScenarioProjection,
    pub realistic: ScenarioProjection,
    pub optimistic: ScenarioProjection,
    /// Full schedule for the realistic scenario only; the outer scenarios
    /// are summarized by their totals.
    pub monthly_returns: Vec<MonthlyPoint>,
}

/// Three-way forecast around a base annual rate. Each scenario is an
/// independent compound projection; there is no cross-scenario coupling.
pub fn forecast(
    principal: f64,
    base_rate_pct: f64,
    years: f64,
    overrides: ScenarioOverrides,
) -> Forecast {
    let pessimistic_rate = overrides
        .pessimistic
        .unwrap_or(base_rate_pct * PESSIMISTIC_FACTOR);
    let realistic_rate = overrides.realistic.unwrap_or(base_rate_pct);
    let optimistic_rate = overrides
        .optimistic
        .unwrap_or(base_rate_pct * OPTIMISTIC_FACTOR);

    Forecast {
        pessimistic: project(principal, pessimistic_rate, years),
        realistic: project(principal, realistic_rate, years),
        optimistic: project(principal, optimistic_rate, years),
        monthly_returns: monthly_schedule(principal, realistic_rate, years),
    }
}

fn project(principal: f64, annual_rate_pct: f64, years: f64) -> ScenarioProjection {
    ScenarioProjection {
        annual_rate: annual_rate_pct,
        total_earnings: compound_return(principal, annual_rate_pct, years),
        total_value: compound_value(principal, annual_rate_pct, years),
    }
}
