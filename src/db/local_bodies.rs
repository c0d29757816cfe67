//! Database queries for local bodies.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::rows::LocalBodyRow;
use crate::entity::local_body::{self, Entity as LocalBody};
use crate::entity::local_body_type;
use crate::error::{AppError, AppResult};

/// Find a local body by id, with its type label joined in.
pub async fn by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<LocalBodyRow>> {
    let result = LocalBody::find_by_id(id)
        .find_also_related(local_body_type::Entity)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get local body {}: {}", id, e)))?;

    Ok(result.map(LocalBodyRow::from))
}

/// All local bodies of one assembly, ordered by id, with type labels.
pub async fn by_assembly(db: &DatabaseConnection, assembly_id: i64) -> AppResult<Vec<LocalBodyRow>> {
    let results = LocalBody::find()
        .filter(local_body::Column::AssemblyId.eq(assembly_id))
        .order_by_asc(local_body::Column::Id)
        .find_also_related(local_body_type::Entity)
        .all(db)
        .await
        .map_err(|e| {
            AppError::Database(format!(
                "Failed to list local bodies of assembly {}: {}",
                assembly_id, e
            ))
        })?;

    Ok(results.into_iter().map(LocalBodyRow::from).collect())
}
