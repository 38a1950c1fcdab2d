use crate::db::PropertyDb;
use crate::models::{NewProperty, Property};
use anyhow::Result;

/// Read-mostly access to property rows. Creation exists for seeding and
/// tests; the admin back office owns the full CRUD surface.
#[derive(Clone)]
pub struct PropertyStore {
    db: PropertyDb,
}

impl PropertyStore {
    pub fn new(db: PropertyDb) -> Self {
        Self { db }
    }

    pub async fn create(&self, property: NewProperty) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO properties (name, location, target_return_rate, funding_goal)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&property.name)
        .bind(&property.location)
        .bind(&property.target_return_rate)
        .bind(property.funding_goal)
        .fetch_one(self.db.pool())
        .await?;

        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Property>> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(property)
    }

    pub async fn list(&self) -> Result<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY name")
            .fetch_all(self.db.pool())
            .await?;

        Ok(properties)
    }
}
