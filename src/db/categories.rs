//! Database queries for the three category tables.
//!
//! Every loader returns a parent-id → label map; ids absent from the map
//! render as `Normal` downstream.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entity::{assembly_category, district_category, local_body_category};
use crate::error::{AppError, AppResult};
use crate::models::CategoryLabel;

fn label(raw: &str) -> CategoryLabel {
    CategoryLabel::parse(raw).unwrap_or_default()
}

/// Category labels for every district.
pub async fn district_map_all(db: &DatabaseConnection) -> AppResult<HashMap<i64, CategoryLabel>> {
    let models = district_category::Entity::find()
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list district categories: {}", e)))?;

    Ok(models
        .into_iter()
        .map(|m| (m.district_id, label(&m.category)))
        .collect())
}

/// Category labels for a set of districts.
pub async fn district_map_for(
    db: &DatabaseConnection,
    ids: &[i64],
) -> AppResult<HashMap<i64, CategoryLabel>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = district_category::Entity::find()
        .filter(district_category::Column::DistrictId.is_in(ids.to_vec()))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list district categories: {}", e)))?;

    Ok(models
        .into_iter()
        .map(|m| (m.district_id, label(&m.category)))
        .collect())
}

/// Category labels for a set of assemblies.
pub async fn assembly_map_for(
    db: &DatabaseConnection,
    ids: &[i64],
) -> AppResult<HashMap<i64, CategoryLabel>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = assembly_category::Entity::find()
        .filter(assembly_category::Column::AssemblyId.is_in(ids.to_vec()))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list assembly categories: {}", e)))?;

    Ok(models
        .into_iter()
        .map(|m| (m.assembly_id, label(&m.category)))
        .collect())
}

/// Category labels for a set of local bodies.
pub async fn local_body_map_for(
    db: &DatabaseConnection,
    ids: &[i64],
) -> AppResult<HashMap<i64, CategoryLabel>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = local_body_category::Entity::find()
        .filter(local_body_category::Column::LocalBodyId.is_in(ids.to_vec()))
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list local body categories: {}", e)))?;

    Ok(models
        .into_iter()
        .map(|m| (m.local_body_id, label(&m.category)))
        .collect())
}
