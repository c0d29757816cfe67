//! Database queries for wards.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::rows::WardRow;
use crate::entity::ward::{self, Entity as Ward};
use crate::error::{AppError, AppResult};

/// Find a ward by id.
pub async fn by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<WardRow>> {
    let model = Ward::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get ward {}: {}", id, e)))?;

    Ok(model.map(WardRow::from))
}

/// All wards of one local body, ordered by ward number.
pub async fn by_local_body(db: &DatabaseConnection, local_body_id: i64) -> AppResult<Vec<WardRow>> {
    let models = Ward::find()
        .filter(ward::Column::LocalBodyId.eq(local_body_id))
        .order_by_asc(ward::Column::WardNo)
        .all(db)
        .await
        .map_err(|e| {
            AppError::Database(format!(
                "Failed to list wards of local body {}: {}",
                local_body_id, e
            ))
        })?;

    Ok(models.into_iter().map(WardRow::from).collect())
}
