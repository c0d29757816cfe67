//! Database queries for assemblies.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::rows::AssemblyRow;
use crate::entity::assembly::{self, Entity as Assembly};
use crate::error::{AppError, AppResult};

/// Find an assembly by id.
pub async fn by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<AssemblyRow>> {
    let model = Assembly::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get assembly {}: {}", id, e)))?;

    Ok(model.map(AssemblyRow::from))
}

/// All assemblies of one district, ordered by id.
pub async fn by_district(db: &DatabaseConnection, district_id: i64) -> AppResult<Vec<AssemblyRow>> {
    let models = Assembly::find()
        .filter(assembly::Column::DistrictId.eq(district_id))
        .order_by_asc(assembly::Column::Id)
        .all(db)
        .await
        .map_err(|e| {
            AppError::Database(format!(
                "Failed to list assemblies of district {}: {}",
                district_id, e
            ))
        })?;

    Ok(models.into_iter().map(AssemblyRow::from).collect())
}
