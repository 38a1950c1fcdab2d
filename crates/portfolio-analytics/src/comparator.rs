use anyhow::Result;
use property_store::{PropertyDb, PropertyStore};

use crate::models::PropertyComparison;

/// Runs the calculators across several properties under identical terms
/// so an investor can line them up side by side.
#[derive(Clone)]
pub struct PropertyComparator {
    properties: PropertyStore,
}

impl PropertyComparator {
    pub fn new(db: PropertyDb) -> Self {
        Self {
            properties: PropertyStore::new(db),
        }
    }

    /// Simple/compound/annualized figures per property for a fixed
    /// principal and term. Ids that don't resolve (or resolve to a
    /// property with an unusable stored rate) are dropped from the
    /// result rather than failing the batch; surviving entries keep the
    /// caller's order.
    pub async fn compare(
        &self,
        property_ids: &[i64],
        principal: f64,
        years: f64,
    ) -> Result<Vec<PropertyComparison>> {
        let mut comparison = Vec::with_capacity(property_ids.len());

        for &id in property_ids {
            let property = match self.properties.get(id).await? {
                Some(property) => property,
                None => {
                    tracing::warn!(property_id = id, "unknown property dropped from comparison");
                    continue;
                }
            };

            let annual_rate = match roi_engine::parse_rate(&property.target_return_rate) {
                Ok(rate) => rate,
                Err(err) => {
                    tracing::warn!(
                        property_id = id,
                        rate = %property.target_return_rate,
                        %err,
                        "property with unusable rate dropped from comparison"
                    );
                    continue;
                }
            };

            let compound = roi_engine::compound_return(principal, annual_rate, years);
            comparison.push(PropertyComparison {
                simple_return: roi_engine::simple_return(principal, annual_rate, years),
                compound_return: compound,
                annualized_return: roi_engine::annualized_return(principal, annual_rate, years),
                total_value: principal + compound,
                annual_rate,
                property,
            });
        }

        Ok(comparison)
    }
}
