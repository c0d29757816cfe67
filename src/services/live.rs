//! Live query service: the exporter's documents computed on demand,
//! scoped to the requested entity plus its immediate children.

use sea_orm::DatabaseConnection;

use crate::db::{assemblies, categories, collection_rates, districts, issues, local_bodies, towns, wards};
use crate::error::{AppError, AppResult};
use crate::models::{AssemblyDocument, DistrictDocument, LocalBodyDocument, StateDocument};
use crate::services::aggregate::{
    CategoryMaps, build_assembly_document, build_district_document, build_local_body_document,
    build_state_document,
};
use crate::services::latest::latest_rate_per_ward;

/// State document over all districts.
pub async fn state_document(db: &DatabaseConnection) -> AppResult<StateDocument> {
    let all_districts = districts::all(db).await?;
    let district_categories = categories::district_map_all(db).await?;

    Ok(build_state_document(&all_districts, &district_categories))
}

/// District document for one district and its assemblies.
pub async fn district_document(db: &DatabaseConnection, id: i64) -> AppResult<DistrictDocument> {
    let district = districts::by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("District {}", id)))?;

    let district_assemblies = assemblies::by_district(db, id).await?;
    let assembly_ids: Vec<i64> = district_assemblies.iter().map(|a| a.id).collect();

    let maps = CategoryMaps {
        districts: categories::district_map_for(db, &[id]).await?,
        assemblies: categories::assembly_map_for(db, &assembly_ids).await?,
        ..Default::default()
    };

    Ok(build_district_document(&district, &district_assemblies, &maps))
}

/// Assembly document for one assembly, its parent district, and its local bodies.
pub async fn assembly_document(db: &DatabaseConnection, id: i64) -> AppResult<AssemblyDocument> {
    let assembly = assemblies::by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assembly {}", id)))?;

    // Orphan-tolerant: a dangling district_id renders an empty parent.
    let parent_district = districts::by_id(db, assembly.district_id).await?;

    let assembly_local_bodies = local_bodies::by_assembly(db, id).await?;
    let local_body_ids: Vec<i64> = assembly_local_bodies.iter().map(|lb| lb.id).collect();

    let district_ids: Vec<i64> = parent_district.iter().map(|d| d.id).collect();
    let maps = CategoryMaps {
        districts: categories::district_map_for(db, &district_ids).await?,
        assemblies: categories::assembly_map_for(db, &[id]).await?,
        local_bodies: categories::local_body_map_for(db, &local_body_ids).await?,
    };

    Ok(build_assembly_document(
        &assembly,
        &assembly_local_bodies,
        parent_district.as_ref(),
        &maps,
    ))
}

/// Local body document for one local body with wards, towns, issues, and
/// current collection rates.
pub async fn local_body_document(
    db: &DatabaseConnection,
    id: i64,
) -> AppResult<LocalBodyDocument> {
    let local_body = local_bodies::by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Local body {}", id)))?;

    let parent_assembly = assemblies::by_id(db, local_body.assembly_id).await?;
    let parent_district = match &parent_assembly {
        Some(a) => districts::by_id(db, a.district_id).await?,
        None => None,
    };

    let local_body_wards = wards::by_local_body(db, id).await?;
    let local_body_towns = towns::by_local_body(db, id).await?;
    let local_body_issues = issues::by_local_body(db, id).await?;

    let ward_ids: Vec<i64> = local_body_wards.iter().map(|w| w.id).collect();
    let rates = collection_rates::by_ward_ids(db, &ward_ids).await?;
    let current_rates = latest_rate_per_ward(&rates);

    let assembly_ids: Vec<i64> = parent_assembly.iter().map(|a| a.id).collect();
    let district_ids: Vec<i64> = parent_district.iter().map(|d| d.id).collect();
    let maps = CategoryMaps {
        districts: categories::district_map_for(db, &district_ids).await?,
        assemblies: categories::assembly_map_for(db, &assembly_ids).await?,
        local_bodies: categories::local_body_map_for(db, &[id]).await?,
    };

    Ok(build_local_body_document(
        &local_body,
        &local_body_wards,
        &local_body_towns,
        &local_body_issues,
        &current_rates,
        parent_assembly.as_ref(),
        parent_district.as_ref(),
        &maps,
    ))
}
