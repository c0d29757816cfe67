//! Denormalized document shapes emitted per hierarchy level.
//!
//! The same shapes are written to disk by the static exporter and returned
//! by the live document endpoints. Every document carries both languages;
//! `name_ml` falls back to the English value when no translation exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{CategoryLabel, IssueType};

/// A district as embedded in the state document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DistrictSummary {
    pub id: i64,
    pub name_en: String,
    pub name_ml: String,
    pub is_active: bool,
    pub category: CategoryLabel,
}

/// Top-level state document: identity, geojson links, and every district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StateDocument {
    pub name_en: String,
    pub name_ml: String,
    pub geojson_outline: String,
    pub geojson_with_districts: String,
    pub districts: Vec<DistrictSummary>,
}

/// An assembly as embedded in a district document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssemblySummary {
    pub id: i64,
    pub name_en: String,
    pub name_ml: String,
    pub category: CategoryLabel,
}

/// Per-district document: own fields plus its assemblies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DistrictDocument {
    pub id: i64,
    pub name_en: String,
    pub name_ml: String,
    pub is_active: bool,
    pub category: CategoryLabel,
    pub geojson_outline: String,
    pub geojson_with_assemblies: String,
    pub assemblies: Vec<AssemblySummary>,
}

/// A local body as embedded in an assembly document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalBodySummary {
    pub id: i64,
    pub name_en: String,
    pub name_ml: String,
    pub category: CategoryLabel,
}

/// Minimal embedded parent (district or assembly).
///
/// All fields besides the category are null when the parent reference does
/// not resolve; orphaned children still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParentSummary {
    pub id: Option<i64>,
    pub name_en: Option<String>,
    pub name_ml: Option<String>,
    pub category: CategoryLabel,
}

impl ParentSummary {
    /// Parent placeholder for an orphaned child.
    pub fn empty() -> Self {
        ParentSummary {
            id: None,
            name_en: None,
            name_ml: None,
            category: CategoryLabel::default(),
        }
    }
}

/// Per-assembly document: own fields, parent district, and its local bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssemblyDocument {
    pub id: i64,
    pub name_en: String,
    pub name_ml: String,
    pub is_active: bool,
    pub category: CategoryLabel,
    pub district: ParentSummary,
    pub geojson_outline: String,
    pub geojson_with_local_bodies: String,
    pub local_bodies: Vec<LocalBodySummary>,
}

/// Local body type label (panchayat / municipality / corporation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalBodyTypeSummary {
    pub name_en: String,
    pub name_ml: String,
}

/// The current collection rate embedded in a ward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WardCollectionDocument {
    pub collection_id: i64,
    pub year_month: String,
    pub rate: f32,
}

/// A ward with its current (latest-period) collection rate, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WardDocument {
    pub id: i64,
    pub ward_no: i32,
    pub name_en: String,
    pub name_ml: String,
    /// Null when the ward has no collection-rate rows.
    pub ward_collection: Option<WardCollectionDocument>,
}

/// A town as embedded in a local body document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TownSummary {
    pub name_en: String,
    pub name_ml: String,
}

/// A single issue as embedded in a local body document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IssueDocument {
    pub id: Uuid,
    pub issue_type: IssueType,
    pub description: String,
    pub image_url: Option<String>,
    pub location_url: Option<String>,
    pub resolved: bool,
    pub town_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Town-type issues grouped per referenced town.
///
/// Groups are keyed by town id; `town_id` is null (and the display name
/// "Unknown") for issues whose town reference does not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TownIssueGroup {
    pub town_id: Option<i64>,
    pub name_en: String,
    pub name_ml: String,
    pub issues: Vec<IssueDocument>,
}

/// Issues of a local body, grouped by the three map-rendered types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IssueGroups {
    pub town: Vec<TownIssueGroup>,
    pub bus_stop: Vec<IssueDocument>,
    pub water_body: Vec<IssueDocument>,
}

/// Per-local-body document: the deepest and widest document in the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocalBodyDocument {
    pub id: i64,
    pub name_en: String,
    pub name_ml: String,
    pub local_body_type: Option<LocalBodyTypeSummary>,
    pub category: CategoryLabel,
    pub assembly: ParentSummary,
    pub district: ParentSummary,
    pub geojson_outline: String,
    pub geojson_with_wards: String,
    pub wards: Vec<WardDocument>,
    pub towns: Vec<TownSummary>,
    pub issues: IssueGroups,
}
