use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use portfolio_analytics::{InvestmentPosition, PortfolioSummary, PropertyComparison};
use property_store::Property;
use roi_engine::{Forecast, MonthlyPoint, ScenarioOverrides};
use serde::{Deserialize, Serialize};

use crate::identity::AuthenticatedUser;
use crate::{ApiResponse, AppError, AppState, FieldError};

#[cfg(test)]
#[path = "roi_routes_tests.rs"]
mod roi_routes_tests;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRoiRequest {
    pub property_id: i64,
    pub investment_amount: f64,
    /// Term in years.
    pub duration: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub property_ids: Vec<i64>,
    pub investment_amount: f64,
    pub duration: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub property_id: i64,
    pub investment_amount: f64,
    pub duration: f64,
    #[serde(default)]
    pub scenarios: ScenarioOverrides,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTerms {
    pub amount: f64,
    pub duration: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnsBreakdown {
    pub simple: f64,
    pub compound: f64,
    pub annualized_return: f64,
    pub total_earnings: f64,
    pub total_value: f64,
    pub monthly_returns: Vec<MonthlyPoint>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRoiResponse {
    pub property: Property,
    pub investment: InvestmentTerms,
    pub returns: ReturnsBreakdown,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub portfolio: PortfolioSummary,
    pub investments: Vec<InvestmentPosition>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub comparison: Vec<PropertyComparison>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub property: Property,
    pub investment: InvestmentTerms,
    pub scenarios: Forecast,
}

pub fn roi_routes() -> Router<AppState> {
    Router::new()
        .route("/roi/property", post(project_property))
        .route("/roi/portfolio", get(get_portfolio))
        .route("/roi/compare", post(compare_properties))
        .route("/roi/forecast", post(forecast_property))
}

/// Upper bound on the projection term. The monthly schedule materializes
/// `years * 12` entries, so an unbounded duration would turn one request
/// into an allocation large enough to take the process down.
const MAX_TERM_YEARS: f64 = 100.0;

fn check_terms(amount: f64, duration: f64) -> Vec<FieldError> {
    let mut fields = Vec::new();
    if !(amount.is_finite() && amount > 0.0) {
        fields.push(FieldError {
            field: "investmentAmount",
            message: "must be a positive number".to_string(),
        });
    }
    if !(duration.is_finite() && duration > 0.0 && duration <= MAX_TERM_YEARS) {
        fields.push(FieldError {
            field: "duration",
            message: format!("must be a positive number of years, at most {MAX_TERM_YEARS}"),
        });
    }
    fields
}

fn ensure_valid(fields: Vec<FieldError>) -> Result<(), AppError> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(fields))
    }
}

/// A stored rate that fails to parse on a directly requested property is
/// data corruption, not caller error: surface it as 500 and log loudly.
fn parse_stored_rate(property: &Property) -> Result<f64, AppError> {
    roi_engine::parse_rate(&property.target_return_rate).map_err(|err| {
        AppError::Internal(anyhow::anyhow!(
            "property {:?} has unusable stored rate {:?}: {err}",
            property.id,
            property.target_return_rate
        ))
    })
}

async fn project_property(
    State(state): State<AppState>,
    Json(req): Json<PropertyRoiRequest>,
) -> Result<Json<ApiResponse<PropertyRoiResponse>>, AppError> {
    ensure_valid(check_terms(req.investment_amount, req.duration))?;

    let property = state
        .properties
        .get(req.property_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("property {}", req.property_id)))?;

    let annual_rate = parse_stored_rate(&property)?;
    let principal = req.investment_amount;
    let compound = roi_engine::compound_return(principal, annual_rate, req.duration);

    let response = PropertyRoiResponse {
        property,
        investment: InvestmentTerms {
            amount: principal,
            duration: req.duration,
        },
        returns: ReturnsBreakdown {
            simple: roi_engine::simple_return(principal, annual_rate, req.duration),
            compound,
            annualized_return: roi_engine::annualized_return(principal, annual_rate, req.duration),
            total_earnings: compound,
            total_value: principal + compound,
            monthly_returns: roi_engine::monthly_schedule(principal, annual_rate, req.duration),
        },
    };

    Ok(Json(ApiResponse::success(response)))
}

async fn get_portfolio(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<ApiResponse<PortfolioResponse>>, AppError> {
    let Extension(user) = user.ok_or(AppError::Unauthorized)?;

    let (portfolio, investments) = state
        .analyzer
        .portfolio_for_user(user.id, Utc::now())
        .await?;

    Ok(Json(ApiResponse::success(PortfolioResponse {
        portfolio,
        investments,
    })))
}

async fn compare_properties(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ApiResponse<CompareResponse>>, AppError> {
    let mut fields = check_terms(req.investment_amount, req.duration);
    if req.property_ids.is_empty() {
        fields.push(FieldError {
            field: "propertyIds",
            message: "must not be empty".to_string(),
        });
    }
    ensure_valid(fields)?;

    let comparison = state
        .comparator
        .compare(&req.property_ids, req.investment_amount, req.duration)
        .await?;

    Ok(Json(ApiResponse::success(CompareResponse { comparison })))
}

async fn forecast_property(
    State(state): State<AppState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ApiResponse<ForecastResponse>>, AppError> {
    ensure_valid(check_terms(req.investment_amount, req.duration))?;

    let property = state
        .properties
        .get(req.property_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("property {}", req.property_id)))?;

    let annual_rate = parse_stored_rate(&property)?;
    let scenarios = roi_engine::forecast(
        req.investment_amount,
        annual_rate,
        req.duration,
        req.scenarios,
    );

    Ok(Json(ApiResponse::success(ForecastResponse {
        property,
        investment: InvestmentTerms {
            amount: req.investment_amount,
            duration: req.duration,
        },
        scenarios,
    })))
}
