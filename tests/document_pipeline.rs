//! End-to-end tests for the document pipeline: snapshot in, files out.
//!
//! These drive the exporter against an in-memory snapshot, which is the
//! same aggregation path the live endpoints use, without needing a
//! database.

use std::collections::HashMap;

use civic_atlas_lib::db::rows::{
    AssemblyRow, CollectionRateRow, DistrictRow, IssueRow, LocalBodyRow, TownRow, WardRow,
};
use civic_atlas_lib::models::CategoryLabel;
use civic_atlas_lib::services::aggregate::{self, CategoryMaps};
use civic_atlas_lib::services::export::{
    DatasetSnapshot, assembly_path, district_path, local_body_path, state_path, write_snapshot,
};
use civic_atlas_lib::services::latest::latest_rate_per_ward;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn fixture_snapshot() -> DatasetSnapshot {
    let mut snapshot = DatasetSnapshot {
        districts: vec![
            DistrictRow {
                id: 1,
                name_en: "Thiruvananthapuram".to_string(),
                name_ml: Some("തിരുവനന്തപുരം".to_string()),
                is_active: true,
            },
            DistrictRow {
                id: 2,
                name_en: "Kollam".to_string(),
                name_ml: None,
                is_active: false,
            },
        ],
        assemblies: vec![
            AssemblyRow {
                id: 11,
                name_en: "Kazhakootam".to_string(),
                name_ml: None,
                district_id: 1,
                is_active: true,
            },
            AssemblyRow {
                id: 12,
                name_en: "Nemom".to_string(),
                name_ml: None,
                district_id: 1,
                is_active: true,
            },
        ],
        local_bodies: vec![
            LocalBodyRow {
                id: 21,
                name_en: "Varkala".to_string(),
                name_ml: None,
                assembly_id: 11,
                type_id: Some(2),
                type_name_en: Some("Municipality".to_string()),
                type_name_ml: None,
            },
            // Orphan: assembly 99 does not exist
            LocalBodyRow {
                id: 22,
                name_en: "Adrift".to_string(),
                name_ml: None,
                assembly_id: 99,
                type_id: None,
                type_name_en: None,
                type_name_ml: None,
            },
        ],
        wards: vec![
            WardRow {
                id: 31,
                ward_no: 1,
                name_en: "Ward 1".to_string(),
                name_ml: None,
                local_body_id: 21,
            },
            WardRow {
                id: 32,
                ward_no: 2,
                name_en: "Ward 2".to_string(),
                name_ml: None,
                local_body_id: 21,
            },
        ],
        towns: vec![TownRow {
            id: 51,
            name_en: "Market Town".to_string(),
            name_ml: None,
            local_body_id: 21,
            lat: 8.73,
            lng: 76.71,
        }],
        issues: vec![
            issue(21, "town", Some(51)),
            issue(21, "town", Some(51)),
            issue(21, "town", Some(404)),
            issue(21, "bus_stop", None),
            issue(21, "road", None),
        ],
        collection_rates: vec![
            rate(1, 31, "2024-05", 80.0),
            rate(2, 31, "2024-06", 92.0),
        ],
        ..Default::default()
    };
    snapshot.categories.districts.insert(1, CategoryLabel::Perfect);
    snapshot.categories.assemblies.insert(11, CategoryLabel::Good);
    snapshot
}

fn issue(local_body_id: i64, issue_type: &str, town_id: Option<i64>) -> IssueRow {
    IssueRow {
        id: Uuid::now_v7(),
        local_body_id,
        issue_type: issue_type.to_string(),
        description: "reported".to_string(),
        image_url: None,
        location_url: None,
        resolved: false,
        town_id,
        created_at: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
    }
}

fn rate(collection_id: i64, ward_id: i64, year_month: &str, value: f32) -> CollectionRateRow {
    CollectionRateRow {
        collection_id,
        ward_id,
        year_month: Some(year_month.to_string()),
        rate: value,
    }
}

#[tokio::test]
async fn export_writes_the_fixed_directory_layout() {
    let dir = tempfile::tempdir().unwrap();
    let summary = write_snapshot(&fixture_snapshot(), dir.path()).await.unwrap();

    // state + 2 districts + 2 assemblies + 2 local bodies
    assert_eq!(summary.documents, 7);
    assert!(state_path(dir.path()).is_file());
    assert!(district_path(dir.path(), 1).is_file());
    assert!(district_path(dir.path(), 2).is_file());
    assert!(assembly_path(dir.path(), 11).is_file());
    assert!(local_body_path(dir.path(), 21).is_file());
    assert!(local_body_path(dir.path(), 22).is_file());
}

#[tokio::test]
async fn state_document_carries_categories_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(&fixture_snapshot(), dir.path()).await.unwrap();

    let state: serde_json::Value =
        serde_json::from_slice(&std::fs::read(state_path(dir.path())).unwrap()).unwrap();

    assert_eq!(state["name_en"], "Kerala");
    assert_eq!(state["districts"][0]["category"], "Perfect");
    // Kollam has no category row: defaults to Normal, never null.
    assert_eq!(state["districts"][1]["category"], "Normal");
    assert_eq!(
        state["geojson_with_districts"],
        "geojson/states/with-districts/kerala.geojson"
    );
}

#[tokio::test]
async fn geojson_links_use_the_slugged_english_name_at_every_level() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(&fixture_snapshot(), dir.path()).await.unwrap();

    let district: serde_json::Value =
        serde_json::from_slice(&std::fs::read(district_path(dir.path(), 1)).unwrap()).unwrap();
    assert_eq!(
        district["geojson_outline"],
        format!(
            "geojson/districts/outlines/{}.geojson",
            aggregate::to_filename("Thiruvananthapuram")
        )
    );

    let local_body: serde_json::Value =
        serde_json::from_slice(&std::fs::read(local_body_path(dir.path(), 21)).unwrap()).unwrap();
    assert_eq!(
        local_body["geojson_outline"],
        "geojson/local-bodies/outlines/varkala.geojson"
    );
}

#[tokio::test]
async fn local_body_document_resolves_rates_and_groups_issues() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(&fixture_snapshot(), dir.path()).await.unwrap();

    let doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(local_body_path(dir.path(), 21)).unwrap()).unwrap();

    // Latest-period rate wins; the other ward has no current value.
    assert_eq!(doc["wards"][0]["ward_collection"]["year_month"], "2024-06");
    assert_eq!(doc["wards"][0]["ward_collection"]["rate"], 92.0);
    assert_eq!(doc["wards"][1]["ward_collection"], serde_json::Value::Null);

    // Both resolved town issues share one "Market Town" group; the dangling
    // reference lands in "Unknown"; road issues are not folded in.
    let town_groups = doc["issues"]["town"].as_array().unwrap();
    assert_eq!(town_groups.len(), 2);
    assert_eq!(town_groups[0]["name_en"], "Market Town");
    assert_eq!(town_groups[0]["issues"].as_array().unwrap().len(), 2);
    assert_eq!(town_groups[1]["name_en"], "Unknown");
    assert_eq!(doc["issues"]["bus_stop"].as_array().unwrap().len(), 1);
    assert_eq!(doc["issues"]["water_body"].as_array().unwrap().len(), 0);

    // Parents embed with categories.
    assert_eq!(doc["assembly"]["id"], 11);
    assert_eq!(doc["assembly"]["category"], "Good");
    assert_eq!(doc["district"]["id"], 1);
}

#[tokio::test]
async fn orphan_local_body_document_has_empty_parents() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(&fixture_snapshot(), dir.path()).await.unwrap();

    let doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(local_body_path(dir.path(), 22)).unwrap()).unwrap();

    assert_eq!(doc["assembly"]["id"], serde_json::Value::Null);
    assert_eq!(doc["assembly"]["category"], "Normal");
    assert_eq!(doc["district"]["id"], serde_json::Value::Null);
    assert_eq!(doc["wards"], serde_json::json!([]));
}

#[test]
fn batch_and_live_paths_share_one_latest_value_resolution() {
    let snapshot = fixture_snapshot();
    let current = latest_rate_per_ward(&snapshot.collection_rates);

    let doc = aggregate::build_local_body_document(
        &snapshot.local_bodies[0],
        &snapshot.wards,
        &snapshot.towns,
        &snapshot.issues,
        &current,
        Some(&snapshot.assemblies[0]),
        Some(&snapshot.districts[0]),
        &snapshot.categories,
    );

    let collection = doc.wards[0].ward_collection.as_ref().unwrap();
    assert_eq!(collection.collection_id, 2);
    assert_eq!(collection.year_month, "2024-06");
}

#[test]
fn category_maps_default_to_normal_for_unknown_ids() {
    let maps = CategoryMaps::default();
    let doc = aggregate::build_district_document(
        &DistrictRow {
            id: 9,
            name_en: "Palakkad".to_string(),
            name_ml: None,
            is_active: true,
        },
        &[],
        &maps,
    );
    assert_eq!(doc.category, CategoryLabel::Normal);

    let mut with_entry = HashMap::new();
    with_entry.insert(9i64, CategoryLabel::Good);
    let doc = aggregate::build_district_document(
        &DistrictRow {
            id: 9,
            name_en: "Palakkad".to_string(),
            name_ml: None,
            is_active: true,
        },
        &[],
        &CategoryMaps {
            districts: with_entry,
            ..Default::default()
        },
    );
    assert_eq!(doc.category, CategoryLabel::Good);
}
