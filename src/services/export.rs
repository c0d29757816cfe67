//! Static export: one full pass of the aggregator over the whole hierarchy,
//! persisted as one JSON document per entity.
//!
//! All tables are bulk-loaded through paginated raw reads before any
//! document is built; any read or write failure aborts the run with no
//! partial document left behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;
use tracing::info;

use crate::db::{self, rows};
use crate::entity;
use crate::error::{AppError, AppResult};
use crate::schema;
use crate::services::aggregate::{
    CategoryMaps, build_assembly_document, build_district_document, build_local_body_document,
    build_state_document,
};
use crate::services::latest::latest_rate_per_ward;

/// Every row the aggregator needs, bulk-loaded up front.
#[derive(Debug, Default)]
pub struct DatasetSnapshot {
    pub districts: Vec<rows::DistrictRow>,
    pub assemblies: Vec<rows::AssemblyRow>,
    pub local_bodies: Vec<rows::LocalBodyRow>,
    pub wards: Vec<rows::WardRow>,
    pub towns: Vec<rows::TownRow>,
    pub issues: Vec<rows::IssueRow>,
    pub collection_rates: Vec<rows::CollectionRateRow>,
    pub categories: CategoryMaps,
}

/// Counts reported after a successful export.
#[derive(Debug, Clone, Copy)]
pub struct ExportSummary {
    pub districts: usize,
    pub assemblies: usize,
    pub local_bodies: usize,
    pub documents: usize,
}

// ============================================================================
// Snapshot loading
// ============================================================================

/// Load every table through paginated raw reads and project each row
/// through the row mapper.
pub async fn load_snapshot(db: &DatabaseConnection) -> AppResult<DatasetSnapshot> {
    let districts = db::fetch_all_json(
        db,
        entity::district::Entity::find().order_by_asc(entity::district::Column::Id),
    )
    .await?
    .iter()
    .map(rows::district_row)
    .collect();

    let assemblies = db::fetch_all_json(
        db,
        entity::assembly::Entity::find().order_by_asc(entity::assembly::Column::Id),
    )
    .await?
    .iter()
    .map(rows::assembly_row)
    .collect();

    let mut local_bodies: Vec<rows::LocalBodyRow> = db::fetch_all_json(
        db,
        entity::local_body::Entity::find().order_by_asc(entity::local_body::Column::Id),
    )
    .await?
    .iter()
    .map(rows::local_body_row)
    .collect();

    let types: HashMap<i64, rows::LocalBodyTypeRow> = db::fetch_all_json(
        db,
        entity::local_body_type::Entity::find()
            .order_by_asc(entity::local_body_type::Column::Id),
    )
    .await?
    .iter()
    .map(rows::local_body_type_row)
    .map(|t| (t.id, t))
    .collect();
    attach_type_names(&mut local_bodies, &types);

    let wards = db::fetch_all_json(
        db,
        entity::ward::Entity::find().order_by_asc(entity::ward::Column::Id),
    )
    .await?
    .iter()
    .map(rows::ward_row)
    .collect();

    let towns = db::fetch_all_json(
        db,
        entity::town::Entity::find().order_by_asc(entity::town::Column::Id),
    )
    .await?
    .iter()
    .map(rows::town_row)
    .collect();

    let issues = db::fetch_all_json(
        db,
        entity::issue::Entity::find().order_by_asc(entity::issue::Column::Id),
    )
    .await?
    .iter()
    .map(rows::issue_row)
    .collect();

    let collection_rates = db::fetch_all_json(
        db,
        entity::ward_collection_rate::Entity::find()
            .order_by_asc(entity::ward_collection_rate::Column::CollectionId),
    )
    .await?
    .iter()
    .map(rows::collection_rate_row)
    .collect();

    let categories = CategoryMaps {
        districts: category_map(
            db::fetch_all_json(db, entity::district_category::Entity::find()).await?,
            schema::district_categories::DISTRICT_ID,
            schema::district_categories::CATEGORY,
        ),
        assemblies: category_map(
            db::fetch_all_json(db, entity::assembly_category::Entity::find()).await?,
            schema::assembly_categories::ASSEMBLY_ID,
            schema::assembly_categories::CATEGORY,
        ),
        local_bodies: category_map(
            db::fetch_all_json(db, entity::local_body_category::Entity::find()).await?,
            schema::local_body_categories::LOCAL_BODY_ID,
            schema::local_body_categories::CATEGORY,
        ),
    };

    Ok(DatasetSnapshot {
        districts,
        assemblies,
        local_bodies,
        wards,
        towns,
        issues,
        collection_rates,
        categories,
    })
}

fn category_map(
    raw: Vec<serde_json::Value>,
    parent_id_key: &str,
    category_key: &str,
) -> HashMap<i64, crate::models::CategoryLabel> {
    raw.iter()
        .map(|v| rows::category_row(v, parent_id_key, category_key))
        .map(|r| (r.parent_id, r.category))
        .collect()
}

fn attach_type_names(
    local_bodies: &mut [rows::LocalBodyRow],
    types: &HashMap<i64, rows::LocalBodyTypeRow>,
) {
    for lb in local_bodies {
        if lb.type_name_en.is_some() {
            continue;
        }
        if let Some(t) = lb.type_id.and_then(|id| types.get(&id)) {
            lb.type_name_en = Some(t.name_en.clone());
            lb.type_name_ml = t.name_ml.clone();
        }
    }
}

// ============================================================================
// Document fan-out
// ============================================================================

/// Output path for the state document.
pub fn state_path(out_dir: &Path) -> PathBuf {
    out_dir.join("state.json")
}

/// Output path for one district document.
pub fn district_path(out_dir: &Path, id: i64) -> PathBuf {
    out_dir.join("districts").join(format!("{}.json", id))
}

/// Output path for one assembly document.
pub fn assembly_path(out_dir: &Path, id: i64) -> PathBuf {
    out_dir.join("assemblies").join(format!("{}.json", id))
}

/// Output path for one local body document.
pub fn local_body_path(out_dir: &Path, id: i64) -> PathBuf {
    out_dir.join("local_bodies").join(format!("{}.json", id))
}

async fn write_document<T: Serialize>(path: &Path, document: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AppError::FileSystem(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let json = serde_json::to_vec_pretty(document)
        .map_err(|e| AppError::FileSystem(format!("Failed to serialize document: {}", e)))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to write {}: {}", path.display(), e)))
}

fn group_by<T: Clone>(items: &[T], key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for item in items {
        grouped.entry(key(item)).or_default().push(item.clone());
    }
    grouped
}

/// Build and write every document from a loaded snapshot.
pub async fn write_snapshot(
    snapshot: &DatasetSnapshot,
    out_dir: &Path,
) -> AppResult<ExportSummary> {
    let assemblies_by_district = group_by(&snapshot.assemblies, |a| a.district_id);
    let local_bodies_by_assembly = group_by(&snapshot.local_bodies, |lb| lb.assembly_id);
    let wards_by_local_body = group_by(&snapshot.wards, |w| w.local_body_id);
    let towns_by_local_body = group_by(&snapshot.towns, |t| t.local_body_id);
    let issues_by_local_body = group_by(&snapshot.issues, |i| i.local_body_id);

    let district_by_id: HashMap<i64, &rows::DistrictRow> =
        snapshot.districts.iter().map(|d| (d.id, d)).collect();
    let assembly_by_id: HashMap<i64, &rows::AssemblyRow> =
        snapshot.assemblies.iter().map(|a| (a.id, a)).collect();

    let current_rates = latest_rate_per_ward(&snapshot.collection_rates);

    let empty_assemblies: Vec<rows::AssemblyRow> = Vec::new();
    let empty_local_bodies: Vec<rows::LocalBodyRow> = Vec::new();
    let empty_wards: Vec<rows::WardRow> = Vec::new();
    let empty_towns: Vec<rows::TownRow> = Vec::new();
    let empty_issues: Vec<rows::IssueRow> = Vec::new();

    let mut documents = 0usize;

    let state = build_state_document(&snapshot.districts, &snapshot.categories.districts);
    write_document(&state_path(out_dir), &state).await?;
    documents += 1;

    for district in &snapshot.districts {
        let assemblies = assemblies_by_district
            .get(&district.id)
            .unwrap_or(&empty_assemblies);
        let document = build_district_document(district, assemblies, &snapshot.categories);
        write_document(&district_path(out_dir, district.id), &document).await?;
        documents += 1;
    }

    for assembly in &snapshot.assemblies {
        let local_bodies = local_bodies_by_assembly
            .get(&assembly.id)
            .unwrap_or(&empty_local_bodies);
        let document = build_assembly_document(
            assembly,
            local_bodies,
            district_by_id.get(&assembly.district_id).copied(),
            &snapshot.categories,
        );
        write_document(&assembly_path(out_dir, assembly.id), &document).await?;
        documents += 1;
    }

    for local_body in &snapshot.local_bodies {
        let parent_assembly = assembly_by_id.get(&local_body.assembly_id).copied();
        let parent_district = parent_assembly
            .and_then(|a| district_by_id.get(&a.district_id))
            .copied();
        let document = build_local_body_document(
            local_body,
            wards_by_local_body
                .get(&local_body.id)
                .unwrap_or(&empty_wards),
            towns_by_local_body
                .get(&local_body.id)
                .unwrap_or(&empty_towns),
            issues_by_local_body
                .get(&local_body.id)
                .unwrap_or(&empty_issues),
            &current_rates,
            parent_assembly,
            parent_district,
            &snapshot.categories,
        );
        write_document(&local_body_path(out_dir, local_body.id), &document).await?;
        documents += 1;
    }

    Ok(ExportSummary {
        districts: snapshot.districts.len(),
        assemblies: snapshot.assemblies.len(),
        local_bodies: snapshot.local_bodies.len(),
        documents,
    })
}

/// Drive one full export run against the live store.
pub async fn run_export(db: &DatabaseConnection, out_dir: &Path) -> AppResult<ExportSummary> {
    info!("Loading dataset snapshot");
    let snapshot = load_snapshot(db).await?;
    info!(
        "Snapshot loaded: {} districts, {} assemblies, {} local bodies, {} wards",
        snapshot.districts.len(),
        snapshot.assemblies.len(),
        snapshot.local_bodies.len(),
        snapshot.wards.len()
    );

    let summary = write_snapshot(&snapshot, out_dir).await?;
    info!(
        "Export complete: {} documents under {}",
        summary.documents,
        out_dir.display()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryLabel;

    fn snapshot() -> DatasetSnapshot {
        let mut snapshot = DatasetSnapshot {
            districts: vec![rows::DistrictRow {
                id: 1,
                name_en: "D1".to_string(),
                name_ml: None,
                is_active: true,
            }],
            assemblies: vec![
                rows::AssemblyRow {
                    id: 11,
                    name_en: "A1".to_string(),
                    name_ml: None,
                    district_id: 1,
                    is_active: true,
                },
                rows::AssemblyRow {
                    id: 12,
                    name_en: "A2".to_string(),
                    name_ml: None,
                    district_id: 1,
                    is_active: true,
                },
            ],
            local_bodies: vec![rows::LocalBodyRow {
                id: 21,
                name_en: "L1".to_string(),
                name_ml: None,
                assembly_id: 11,
                type_id: None,
                type_name_en: None,
                type_name_ml: None,
            }],
            wards: vec![
                rows::WardRow {
                    id: 31,
                    ward_no: 1,
                    name_en: "W1".to_string(),
                    name_ml: None,
                    local_body_id: 21,
                },
                rows::WardRow {
                    id: 32,
                    ward_no: 2,
                    name_en: "W2".to_string(),
                    name_ml: None,
                    local_body_id: 21,
                },
            ],
            collection_rates: vec![
                rows::CollectionRateRow {
                    collection_id: 1,
                    ward_id: 31,
                    year_month: Some("2024-05".to_string()),
                    rate: 80.0,
                },
                rows::CollectionRateRow {
                    collection_id: 2,
                    ward_id: 31,
                    year_month: Some("2024-06".to_string()),
                    rate: 92.0,
                },
            ],
            ..Default::default()
        };
        snapshot
            .categories
            .districts
            .insert(1, CategoryLabel::Good);
        snapshot
    }

    #[test]
    fn test_document_paths() {
        let out = Path::new("public/data");
        assert_eq!(state_path(out), Path::new("public/data/state.json"));
        assert_eq!(
            district_path(out, 7),
            Path::new("public/data/districts/7.json")
        );
        assert_eq!(
            assembly_path(out, 11),
            Path::new("public/data/assemblies/11.json")
        );
        assert_eq!(
            local_body_path(out, 21),
            Path::new("public/data/local_bodies/21.json")
        );
    }

    #[tokio::test]
    async fn test_write_snapshot_emits_every_level() {
        let dir = tempfile::tempdir().unwrap();
        let summary = write_snapshot(&snapshot(), dir.path()).await.unwrap();

        // state + 1 district + 2 assemblies + 1 local body
        assert_eq!(summary.documents, 5);

        let state: serde_json::Value = serde_json::from_slice(
            &std::fs::read(state_path(dir.path())).unwrap(),
        )
        .unwrap();
        assert_eq!(state["districts"][0]["category"], "Good");

        let local_body: serde_json::Value = serde_json::from_slice(
            &std::fs::read(local_body_path(dir.path(), 21)).unwrap(),
        )
        .unwrap();
        assert_eq!(local_body["wards"][0]["ward_collection"]["rate"], 92.0);
        assert_eq!(local_body["wards"][1]["ward_collection"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_assembly_without_local_bodies_gets_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(&snapshot(), dir.path()).await.unwrap();

        let assembly: serde_json::Value = serde_json::from_slice(
            &std::fs::read(assembly_path(dir.path(), 12)).unwrap(),
        )
        .unwrap();
        assert_eq!(assembly["local_bodies"], serde_json::json!([]));
        assert_eq!(assembly["district"]["id"], 1);
    }
}
