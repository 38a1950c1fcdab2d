use serde::{Deserialize, Serialize};

/// One point on the month-by-month growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: u32,
    pub value: f64,
}

/// Month-by-month balance series for charting.
///
/// Deliberately iterative rather than closed-form: the running balance
/// accrues one month at a time so every intermediate point sits on the
/// same curve as the final compound figure. Fully materialized — call
/// sites chart the whole series.
pub fn monthly_schedule(principal: f64, annual_rate_pct: f64, years: f64) -> Vec<MonthlyPoint> {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let months = (years * 12.0).round() as u32;

    let mut points = Vec::with_capacity(months as usize);
    let mut balance = principal;
    for month in 1..=months {
        balance *= 1.0 + monthly_rate;
        points.push(MonthlyPoint {
            month,
            value: balance,
        });
    }
    points
}
