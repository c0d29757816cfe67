//! Database queries for towns.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::rows::TownRow;
use crate::entity::town::{self, Entity as Town};
use crate::error::{AppError, AppResult};

/// All towns of one local body, ordered by id.
pub async fn by_local_body(db: &DatabaseConnection, local_body_id: i64) -> AppResult<Vec<TownRow>> {
    let models = Town::find()
        .filter(town::Column::LocalBodyId.eq(local_body_id))
        .order_by_asc(town::Column::Id)
        .all(db)
        .await
        .map_err(|e| {
            AppError::Database(format!(
                "Failed to list towns of local body {}: {}",
                local_body_id, e
            ))
        })?;

    Ok(models.into_iter().map(TownRow::from).collect())
}
