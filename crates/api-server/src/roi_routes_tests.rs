#[cfg(test)]
mod tests {
    use crate::{router, AppState};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use chrono::{Duration, Utc};
    use property_store::{
        InvestmentStatus, InvestmentStore, NewInvestment, NewProperty, PropertyDb, PropertyStore,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> (Router, PropertyDb) {
        let db = PropertyDb::in_memory().await.unwrap();
        (router(AppState::new(db.clone())), db)
    }

    async fn seed_property(db: &PropertyDb, name: &str, rate: &str) -> i64 {
        PropertyStore::new(db.clone())
            .create(NewProperty {
                name: name.to_string(),
                location: "Valencia".to_string(),
                target_return_rate: rate.to_string(),
                funding_goal: 500_000.0,
            })
            .await
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app().await;
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_property_roi_happy_path() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Riverside Lofts", "12%").await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/property",
                json!({ "propertyId": id, "investmentAmount": 100000.0, "duration": 1.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let returns = &body["data"]["returns"];
        assert!((returns["simple"].as_f64().unwrap() - 12_000.0).abs() < 0.01);
        assert!((returns["compound"].as_f64().unwrap() - 12_682.50).abs() < 0.01);
        assert!((returns["totalValue"].as_f64().unwrap() - 112_682.50).abs() < 0.01);
        assert_eq!(returns["monthlyReturns"].as_array().unwrap().len(), 12);
        assert_eq!(body["data"]["property"]["name"], "Riverside Lofts");
    }

    #[tokio::test]
    async fn test_property_roi_validation_failure() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Alba Court", "9%").await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/property",
                json!({ "propertyId": id, "investmentAmount": -5.0, "duration": 0.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"investmentAmount"));
        assert!(fields.contains(&"duration"));
    }

    #[tokio::test]
    async fn test_property_roi_rejects_runaway_duration() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Alba Court", "9%").await;

        // 1e8 years would round to more schedule entries than fit in
        // memory; the boundary must refuse it before any math runs.
        let (status, body) = send(
            app,
            post_json(
                "/roi/property",
                json!({ "propertyId": id, "investmentAmount": 1000.0, "duration": 1e8 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["duration"]);
    }

    #[tokio::test]
    async fn test_property_roi_unknown_property_is_404() {
        let (app, _) = test_app().await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/property",
                json!({ "propertyId": 9999, "investmentAmount": 1000.0, "duration": 1.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_property_roi_corrupt_rate_is_500() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Broken", "call us").await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/property",
                json!({ "propertyId": id, "investmentAmount": 1000.0, "duration": 1.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "internal server error");
    }

    #[tokio::test]
    async fn test_portfolio_requires_identity() {
        let (app, _) = test_app().await;
        let request = Request::builder()
            .uri("/roi/portfolio")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_portfolio_empty_for_new_investor() {
        let (app, _) = test_app().await;
        let request = Request::builder()
            .uri("/roi/portfolio")
            .header("X-User-Id", "42")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["portfolio"]["status"], "empty");
        assert_eq!(body["data"]["investments"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_portfolio_aggregates_holdings() {
        let (app, db) = test_app().await;
        let property_id = seed_property(&db, "Harbor View", "10%").await;

        InvestmentStore::new(db.clone())
            .create(NewInvestment {
                property_id,
                user_id: 42,
                principal: 50_000.0,
                start_date: Utc::now() - Duration::days(365),
                status: InvestmentStatus::Active,
            })
            .await
            .unwrap();

        let request = Request::builder()
            .uri("/roi/portfolio")
            .header("X-User-Id", "42")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        let portfolio = &body["data"]["portfolio"];
        assert_eq!(portfolio["status"], "aggregated");
        assert!((portfolio["totalInvested"].as_f64().unwrap() - 50_000.0).abs() < 1e-6);
        assert!(portfolio["totalEarnings"].as_f64().unwrap() > 0.0);
        assert_eq!(body["data"]["investments"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_compare_drops_unknown_ids() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Alba Court", "9%").await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/compare",
                json!({ "propertyIds": [id, 9999], "investmentAmount": 10000.0, "duration": 2.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let comparison = body["data"]["comparison"].as_array().unwrap();
        assert_eq!(comparison.len(), 1);
        assert_eq!(comparison[0]["property"]["name"], "Alba Court");
    }

    #[tokio::test]
    async fn test_compare_rejects_empty_id_list() {
        let (app, _) = test_app().await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/compare",
                json!({ "propertyIds": [], "investmentAmount": 10000.0, "duration": 2.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["fields"][0]["field"].as_str().unwrap(),
            "propertyIds"
        );
    }

    #[tokio::test]
    async fn test_forecast_scenarios_ordered() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Quayside", "12%").await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/forecast",
                json!({ "propertyId": id, "investmentAmount": 100000.0, "duration": 2.0 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let scenarios = &body["data"]["scenarios"];
        let pessimistic = scenarios["pessimistic"]["totalEarnings"].as_f64().unwrap();
        let realistic = scenarios["realistic"]["totalEarnings"].as_f64().unwrap();
        let optimistic = scenarios["optimistic"]["totalEarnings"].as_f64().unwrap();
        assert!(pessimistic <= realistic && realistic <= optimistic);
        assert_eq!(scenarios["monthlyReturns"].as_array().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn test_forecast_honors_overrides() {
        let (app, db) = test_app().await;
        let id = seed_property(&db, "Quayside", "12%").await;

        let (status, body) = send(
            app,
            post_json(
                "/roi/forecast",
                json!({
                    "propertyId": id,
                    "investmentAmount": 100000.0,
                    "duration": 1.0,
                    "scenarios": { "pessimistic": 1.0, "optimistic": 25.0 }
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let scenarios = &body["data"]["scenarios"];
        assert!((scenarios["pessimistic"]["annualRate"].as_f64().unwrap() - 1.0).abs() < 1e-9);
        assert!((scenarios["realistic"]["annualRate"].as_f64().unwrap() - 12.0).abs() < 1e-9);
        assert!((scenarios["optimistic"]["annualRate"].as_f64().unwrap() - 25.0).abs() < 1e-9);
    }
}
