//! Database queries for districts.

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::db::rows::DistrictRow;
use crate::entity::district::{self, Entity as District};
use crate::error::{AppError, AppResult};

/// All districts, ordered by id.
pub async fn all(db: &DatabaseConnection) -> AppResult<Vec<DistrictRow>> {
    let models = District::find()
        .order_by_asc(district::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list districts: {}", e)))?;

    Ok(models.into_iter().map(DistrictRow::from).collect())
}

/// Find a district by id.
pub async fn by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<DistrictRow>> {
    let model = District::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get district {}: {}", id, e)))?;

    Ok(model.map(DistrictRow::from))
}
