//! Row mapper: projections from raw store rows onto stable internal shapes.
//!
//! Each entity has two constructors: one from a raw JSON row (paginated
//! `into_json()` reads in batch mode) and one from typed SeaORM models
//! (live mode). Both produce the same row structs consumed by the
//! aggregator. Raw-row lookups go through the schema registry; unknown
//! keys are dropped, missing keys become defaults, and mapping an
//! already-mapped row yields the same row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::entity;
use crate::models::CategoryLabel;
use crate::schema;

// ============================================================================
// Field extraction helpers
// ============================================================================

fn i64_field(v: &JsonValue, key: &str) -> i64 {
    v.get(key).and_then(JsonValue::as_i64).unwrap_or_default()
}

fn opt_i64_field(v: &JsonValue, key: &str) -> Option<i64> {
    v.get(key).and_then(JsonValue::as_i64)
}

fn i32_field(v: &JsonValue, key: &str) -> i32 {
    v.get(key)
        .and_then(JsonValue::as_i64)
        .unwrap_or_default() as i32
}

fn str_field(v: &JsonValue, key: &str) -> String {
    v.get(key)
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str_field(v: &JsonValue, key: &str) -> Option<String> {
    v.get(key)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
}

fn bool_field(v: &JsonValue, key: &str) -> bool {
    v.get(key).and_then(JsonValue::as_bool).unwrap_or_default()
}

fn f32_field(v: &JsonValue, key: &str) -> f32 {
    v.get(key).and_then(JsonValue::as_f64).unwrap_or_default() as f32
}

fn f64_field(v: &JsonValue, key: &str) -> f64 {
    v.get(key).and_then(JsonValue::as_f64).unwrap_or_default()
}

fn uuid_field(v: &JsonValue, key: &str) -> Uuid {
    v.get(key)
        .and_then(JsonValue::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or(Uuid::nil())
}

fn datetime_field(v: &JsonValue, key: &str) -> DateTime<Utc> {
    v.get(key)
        .and_then(JsonValue::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

// ============================================================================
// Row shapes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRow {
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyRow {
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub district_id: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalBodyRow {
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub assembly_id: i64,
    pub type_id: Option<i64>,
    pub type_name_en: Option<String>,
    pub type_name_ml: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalBodyTypeRow {
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardRow {
    pub id: i64,
    pub ward_no: i32,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub local_body_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRateRow {
    pub collection_id: i64,
    pub ward_id: i64,
    /// Absent period keys exclude the row from latest-value resolution.
    pub year_month: Option<String>,
    pub rate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownRow {
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub local_body_id: i64,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRow {
    pub id: Uuid,
    pub local_body_id: i64,
    pub issue_type: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location_url: Option<String>,
    pub resolved: bool,
    pub town_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub parent_id: i64,
    pub category: CategoryLabel,
}

// ============================================================================
// Raw-row projections (batch mode)
// ============================================================================

pub fn district_row(v: &JsonValue) -> DistrictRow {
    use schema::districts as col;
    DistrictRow {
        id: i64_field(v, col::ID),
        name_en: str_field(v, col::NAME_EN),
        name_ml: opt_str_field(v, col::NAME_ML),
        is_active: bool_field(v, col::IS_ACTIVE),
    }
}

pub fn assembly_row(v: &JsonValue) -> AssemblyRow {
    use schema::assemblies as col;
    AssemblyRow {
        id: i64_field(v, col::ID),
        name_en: str_field(v, col::NAME_EN),
        name_ml: opt_str_field(v, col::NAME_ML),
        district_id: i64_field(v, col::DISTRICT_ID),
        is_active: bool_field(v, col::IS_ACTIVE),
    }
}

/// Local body rows may carry their type either as flattened sibling keys
/// (an already-mapped row) or as a nested object under the related table's
/// name (a joined read); both flatten to the same shape.
pub fn local_body_row(v: &JsonValue) -> LocalBodyRow {
    use schema::local_bodies as col;
    let nested = v.get(schema::local_body_types::TABLE);
    LocalBodyRow {
        id: i64_field(v, col::ID),
        name_en: str_field(v, col::NAME_EN),
        name_ml: opt_str_field(v, col::NAME_ML),
        assembly_id: i64_field(v, col::ASSEMBLY_ID),
        type_id: opt_i64_field(v, col::TYPE_ID),
        type_name_en: opt_str_field(v, col::TYPE_NAME_EN).or_else(|| {
            nested.and_then(|n| opt_str_field(n, schema::local_body_types::NAME_EN))
        }),
        type_name_ml: opt_str_field(v, col::TYPE_NAME_ML).or_else(|| {
            nested.and_then(|n| opt_str_field(n, schema::local_body_types::NAME_ML))
        }),
    }
}

pub fn local_body_type_row(v: &JsonValue) -> LocalBodyTypeRow {
    use schema::local_body_types as col;
    LocalBodyTypeRow {
        id: i64_field(v, col::ID),
        name_en: str_field(v, col::NAME_EN),
        name_ml: opt_str_field(v, col::NAME_ML),
    }
}

pub fn ward_row(v: &JsonValue) -> WardRow {
    use schema::wards as col;
    WardRow {
        id: i64_field(v, col::ID),
        ward_no: i32_field(v, col::WARD_NO),
        name_en: str_field(v, col::NAME_EN),
        name_ml: opt_str_field(v, col::NAME_ML),
        local_body_id: i64_field(v, col::LOCAL_BODY_ID),
    }
}

pub fn collection_rate_row(v: &JsonValue) -> CollectionRateRow {
    use schema::ward_collection_rates as col;
    CollectionRateRow {
        collection_id: i64_field(v, col::COLLECTION_ID),
        ward_id: i64_field(v, col::WARD_ID),
        year_month: opt_str_field(v, col::YEAR_MONTH),
        rate: f32_field(v, col::RATE),
    }
}

pub fn town_row(v: &JsonValue) -> TownRow {
    use schema::towns as col;
    TownRow {
        id: i64_field(v, col::ID),
        name_en: str_field(v, col::NAME_EN),
        name_ml: opt_str_field(v, col::NAME_ML),
        local_body_id: i64_field(v, col::LOCAL_BODY_ID),
        lat: f64_field(v, col::LAT),
        lng: f64_field(v, col::LNG),
    }
}

pub fn issue_row(v: &JsonValue) -> IssueRow {
    use schema::issues as col;
    IssueRow {
        id: uuid_field(v, col::ID),
        local_body_id: i64_field(v, col::LOCAL_BODY_ID),
        issue_type: str_field(v, col::ISSUE_TYPE),
        description: str_field(v, col::DESCRIPTION),
        image_url: opt_str_field(v, col::IMAGE_URL),
        location_url: opt_str_field(v, col::LOCATION_URL),
        resolved: bool_field(v, col::RESOLVED),
        town_id: opt_i64_field(v, col::TOWN_ID),
        created_at: datetime_field(v, col::CREATED_AT),
    }
}

/// Category rows differ only in the name of their parent-id column, so the
/// caller passes the registry names for both columns.
pub fn category_row(v: &JsonValue, parent_id_key: &str, category_key: &str) -> CategoryRow {
    CategoryRow {
        parent_id: i64_field(v, parent_id_key),
        category: v
            .get(category_key)
            .and_then(JsonValue::as_str)
            .and_then(CategoryLabel::parse)
            .unwrap_or_default(),
    }
}

// ============================================================================
// Typed-model projections (live mode)
// ============================================================================

impl From<entity::district::Model> for DistrictRow {
    fn from(m: entity::district::Model) -> Self {
        DistrictRow {
            id: m.id,
            name_en: m.name_en,
            name_ml: m.name_ml,
            is_active: m.is_active,
        }
    }
}

impl From<entity::assembly::Model> for AssemblyRow {
    fn from(m: entity::assembly::Model) -> Self {
        AssemblyRow {
            id: m.id,
            name_en: m.name_en,
            name_ml: m.name_ml,
            district_id: m.district_id,
            is_active: m.is_active,
        }
    }
}

impl
    From<(
        entity::local_body::Model,
        Option<entity::local_body_type::Model>,
    )> for LocalBodyRow
{
    fn from(
        (m, type_model): (
            entity::local_body::Model,
            Option<entity::local_body_type::Model>,
        ),
    ) -> Self {
        LocalBodyRow {
            id: m.id,
            name_en: m.name_en,
            name_ml: m.name_ml,
            assembly_id: m.assembly_id,
            type_id: m.type_id,
            type_name_en: type_model.as_ref().map(|t| t.name_en.clone()),
            type_name_ml: type_model.and_then(|t| t.name_ml),
        }
    }
}

impl From<entity::ward::Model> for WardRow {
    fn from(m: entity::ward::Model) -> Self {
        WardRow {
            id: m.id,
            ward_no: m.ward_no,
            name_en: m.name_en,
            name_ml: m.name_ml,
            local_body_id: m.local_body_id,
        }
    }
}

impl From<entity::ward_collection_rate::Model> for CollectionRateRow {
    fn from(m: entity::ward_collection_rate::Model) -> Self {
        CollectionRateRow {
            collection_id: m.collection_id,
            ward_id: m.ward_id,
            year_month: Some(m.year_month),
            rate: m.rate,
        }
    }
}

impl From<entity::town::Model> for TownRow {
    fn from(m: entity::town::Model) -> Self {
        TownRow {
            id: m.id,
            name_en: m.name_en,
            name_ml: m.name_ml,
            local_body_id: m.local_body_id,
            lat: m.lat,
            lng: m.lng,
        }
    }
}

impl From<entity::issue::Model> for IssueRow {
    fn from(m: entity::issue::Model) -> Self {
        IssueRow {
            id: m.id,
            local_body_id: m.local_body_id,
            issue_type: m.issue_type,
            description: m.description,
            image_url: m.image_url,
            location_url: m.location_url,
            resolved: m.resolved,
            town_id: m.town_id,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_district_row_drops_unknown_keys() {
        let raw = json!({
            "id": 7,
            "name_en": "Kollam",
            "name_ml": "കൊല്ലം",
            "is_active": true,
            "internal_sync_marker": "xyz"
        });
        let row = district_row(&raw);
        assert_eq!(row.id, 7);
        assert_eq!(row.name_en, "Kollam");
        assert_eq!(row.name_ml.as_deref(), Some("കൊല്ലം"));
        assert!(row.is_active);
        assert!(serde_json::to_value(&row)
            .unwrap()
            .get("internal_sync_marker")
            .is_none());
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let raw = json!({
            "id": 3,
            "name_en": "Varkala",
            "name_ml": null,
            "assembly_id": 12,
            "type_id": 2,
            "local_body_types": {"name_en": "Municipality", "name_ml": "മുനിസിപ്പാലിറ്റി"}
        });
        let once = local_body_row(&raw);
        let again = local_body_row(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, again);
        assert_eq!(once.type_name_en.as_deref(), Some("Municipality"));
    }

    #[test]
    fn test_missing_nested_relation_maps_to_absent() {
        let raw = json!({
            "id": 4,
            "name_en": "Chirayinkeezhu",
            "assembly_id": 9
        });
        let row = local_body_row(&raw);
        assert_eq!(row.type_id, None);
        assert_eq!(row.type_name_en, None);
        assert_eq!(row.type_name_ml, None);
    }

    #[test]
    fn test_collection_rate_row_tolerates_missing_period() {
        let raw = json!({"collection_id": 1, "ward_id": 5, "rate": 88.5});
        let row = collection_rate_row(&raw);
        assert_eq!(row.year_month, None);
        assert_eq!(row.ward_id, 5);
        assert!((row.rate - 88.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_category_row_defaults_unknown_label() {
        let raw = json!({"district_id": 2, "category": "Splendid"});
        let row = category_row(
            &raw,
            crate::schema::district_categories::DISTRICT_ID,
            crate::schema::district_categories::CATEGORY,
        );
        assert_eq!(row.parent_id, 2);
        assert_eq!(row.category, CategoryLabel::Normal);
    }
}
