use crate::db::PropertyDb;
use crate::models::{Investment, InvestmentStatus, NewInvestment};
use anyhow::Result;

/// Access to an investor's holdings.
#[derive(Clone)]
pub struct InvestmentStore {
    db: PropertyDb,
}

impl InvestmentStore {
    pub fn new(db: PropertyDb) -> Self {
        Self { db }
    }

    pub async fn create(&self, investment: NewInvestment) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO investments (property_id, user_id, principal, start_date, status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(investment.property_id)
        .bind(investment.user_id)
        .bind(investment.principal)
        .bind(investment.start_date)
        .bind(investment.status)
        .fetch_one(self.db.pool())
        .await?;

        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Investment>> {
        let investment = sqlx::query_as::<_, Investment>("SELECT * FROM investments WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(investment)
    }

    /// All of a user's investments, oldest first.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Investment>> {
        let investments = sqlx::query_as::<_, Investment>(
            "SELECT * FROM investments WHERE user_id = ? ORDER BY start_date",
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(investments)
    }

    pub async fn update_status(&self, id: i64, status: InvestmentStatus) -> Result<()> {
        sqlx::query("UPDATE investments SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProperty;
    use crate::properties::PropertyStore;
    use chrono::Utc;

    async fn seeded_stores() -> (PropertyStore, InvestmentStore, i64) {
        let db = PropertyDb::in_memory().await.unwrap();
        let properties = PropertyStore::new(db.clone());
        let investments = InvestmentStore::new(db);

        let property_id = properties
            .create(NewProperty {
                name: "Harbor View".to_string(),
                location: "Porto".to_string(),
                target_return_rate: "10%".to_string(),
                funding_goal: 750_000.0,
            })
            .await
            .unwrap();

        (properties, investments, property_id)
    }

    #[tokio::test]
    async fn test_create_and_fetch_for_user() {
        let (_, investments, property_id) = seeded_stores().await;

        let id = investments
            .create(NewInvestment {
                property_id,
                user_id: 42,
                principal: 25_000.0,
                start_date: Utc::now(),
                status: InvestmentStatus::Active,
            })
            .await
            .unwrap();
        assert!(id > 0);

        let holdings = investments.for_user(42).await.unwrap();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].principal, 25_000.0);
        assert_eq!(holdings[0].status, InvestmentStatus::Active);

        assert!(investments.for_user(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status() {
        let (_, investments, property_id) = seeded_stores().await;

        let id = investments
            .create(NewInvestment {
                property_id,
                user_id: 42,
                principal: 10_000.0,
                start_date: Utc::now(),
                status: InvestmentStatus::Pending,
            })
            .await
            .unwrap();

        investments
            .update_status(id, InvestmentStatus::Cancelled)
            .await
            .unwrap();

        let investment = investments.get(id).await.unwrap().unwrap();
        assert_eq!(investment.status, InvestmentStatus::Cancelled);
        assert!(!investment.status.counts_toward_portfolio());
    }

    #[tokio::test]
    async fn test_foreign_key_enforced() {
        let (_, investments, _) = seeded_stores().await;

        let result = investments
            .create(NewInvestment {
                property_id: 9999,
                user_id: 1,
                principal: 1_000.0,
                start_date: Utc::now(),
                status: InvestmentStatus::Pending,
            })
            .await;

        assert!(result.is_err());
    }
}
