//! Simple and compound interest over a principal, annual rate and term.
//! Rates are percentages (12.5 means 12.5% per year), terms are years.

/// Simple (non-compounding) earnings over the full term.
pub fn simple_return(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    principal * (annual_rate_pct / 100.0) * years
}

/// Final balance after monthly compounding.
///
/// The exponent is kept fractional so that elapsed-time projections
/// (portfolio "current value" part-way through a month) land on the same
/// curve as full-term projections.
pub fn compound_value(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let months = years * 12.0;
    principal * (1.0 + monthly_rate).powf(months)
}

/// Monthly-compounded earnings over the full term.
pub fn compound_return(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    compound_value(principal, annual_rate_pct, years) - principal
}

/// Annualized growth rate (percent) implied by the compounded final value.
pub fn annualized_return(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    let final_value = compound_value(principal, annual_rate_pct, years);
    ((final_value / principal).powf(1.0 / years) - 1.0) * 100.0
}
