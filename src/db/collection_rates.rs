//! Database queries for ward collection rates.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::db::rows::CollectionRateRow;
use crate::entity::ward_collection_rate::{self, ActiveModel, Entity as WardCollectionRate};
use crate::error::{AppError, AppResult};

/// All collection-rate rows for a set of wards.
pub async fn by_ward_ids(
    db: &DatabaseConnection,
    ward_ids: &[i64],
) -> AppResult<Vec<CollectionRateRow>> {
    if ward_ids.is_empty() {
        return Ok(Vec::new());
    }

    let models = WardCollectionRate::find()
        .filter(ward_collection_rate::Column::WardId.is_in(ward_ids.to_vec()))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list collection rates: {}", e)))?;

    Ok(models.into_iter().map(CollectionRateRow::from).collect())
}

/// Upsert the rate for one (ward, period) pair.
///
/// Rate validation happens at the API boundary; this only performs the
/// single-row write the store makes atomic.
pub async fn upsert(
    db: &DatabaseConnection,
    ward_id: i64,
    year_month: &str,
    rate: f32,
) -> AppResult<CollectionRateRow> {
    let existing = WardCollectionRate::find()
        .filter(ward_collection_rate::Column::WardId.eq(ward_id))
        .filter(ward_collection_rate::Column::YearMonth.eq(year_month))
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to look up collection rate: {}", e)))?;

    if let Some(m) = existing {
        let mut active: ActiveModel = m.into();
        active.rate = Set(rate);
        let updated = active
            .update(db)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update collection rate: {}", e)))?;
        return Ok(CollectionRateRow::from(updated));
    }

    let model = ActiveModel {
        ward_id: Set(ward_id),
        year_month: Set(year_month.to_string()),
        rate: Set(rate),
        ..Default::default()
    };

    let result = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert collection rate: {}", e)))?;

    Ok(CollectionRateRow::from(result))
}
