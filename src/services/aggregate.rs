//! Hierarchy aggregator: denormalized document builders.
//!
//! Pure functions over pre-fetched rows; the static exporter feeds them
//! from bulk-preloaded tables and the live query service from scoped
//! point queries, so both paths share one aggregation.

use std::collections::HashMap;

use crate::db::rows::{
    AssemblyRow, CollectionRateRow, DistrictRow, IssueRow, LocalBodyRow, TownRow, WardRow,
};
use crate::models::{
    AssemblyDocument, AssemblySummary, CategoryLabel, DistrictDocument, DistrictSummary,
    IssueDocument, IssueGroups, IssueType, LocalBodyDocument, LocalBodySummary,
    LocalBodyTypeSummary, ParentSummary, StateDocument, TownIssueGroup, TownSummary,
    WardCollectionDocument, WardDocument,
};

/// Fixed state identity fields.
pub const STATE_NAME_EN: &str = "Kerala";
pub const STATE_NAME_ML: &str = "കേരളം";

/// Display name for issues whose town reference does not resolve.
const UNKNOWN_TOWN: &str = "Unknown";

/// Category labels per hierarchy level, keyed by entity id.
#[derive(Debug, Clone, Default)]
pub struct CategoryMaps {
    pub districts: HashMap<i64, CategoryLabel>,
    pub assemblies: HashMap<i64, CategoryLabel>,
    pub local_bodies: HashMap<i64, CategoryLabel>,
}

fn category_for(map: &HashMap<i64, CategoryLabel>, id: i64) -> CategoryLabel {
    map.get(&id).copied().unwrap_or_default()
}

/// Malayalam display name, falling back to the English value.
fn ml_or_en(name_ml: &Option<String>, name_en: &str) -> String {
    match name_ml {
        Some(ml) if !ml.is_empty() => ml.clone(),
        _ => name_en.to_string(),
    }
}

// ============================================================================
// Geojson resource links
// ============================================================================

/// Turn an entity's English name into a stable geojson file key:
/// lowercase, whitespace runs to single hyphens, anything outside
/// `[a-z0-9-]` stripped, repeated hyphens collapsed, edges trimmed.
pub fn to_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut prev_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !prev_hyphen {
                slug.push('-');
                prev_hyphen = true;
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            prev_hyphen = false;
        }
        // everything else is stripped
    }

    slug.trim_matches('-').to_string()
}

fn outline_link(scope: &str, name: &str) -> String {
    format!("geojson/{}/outlines/{}.geojson", scope, to_filename(name))
}

fn with_children_link(scope: &str, children: &str, name: &str) -> String {
    format!(
        "geojson/{}/with-{}/{}.geojson",
        scope,
        children,
        to_filename(name)
    )
}

// ============================================================================
// Document builders
// ============================================================================

/// State document: identity, geojson links, and every district annotated
/// with its category.
pub fn build_state_document(
    districts: &[DistrictRow],
    district_categories: &HashMap<i64, CategoryLabel>,
) -> StateDocument {
    StateDocument {
        name_en: STATE_NAME_EN.to_string(),
        name_ml: STATE_NAME_ML.to_string(),
        geojson_outline: outline_link("states", STATE_NAME_EN),
        geojson_with_districts: with_children_link("states", "districts", STATE_NAME_EN),
        districts: districts
            .iter()
            .map(|d| DistrictSummary {
                id: d.id,
                name_en: d.name_en.clone(),
                name_ml: ml_or_en(&d.name_ml, &d.name_en),
                is_active: d.is_active,
                category: category_for(district_categories, d.id),
            })
            .collect(),
    }
}

/// District document: own fields plus category, geojson links derived from
/// the English name, and each assembly with its category.
pub fn build_district_document(
    district: &DistrictRow,
    assemblies: &[AssemblyRow],
    categories: &CategoryMaps,
) -> DistrictDocument {
    DistrictDocument {
        id: district.id,
        name_en: district.name_en.clone(),
        name_ml: ml_or_en(&district.name_ml, &district.name_en),
        is_active: district.is_active,
        category: category_for(&categories.districts, district.id),
        geojson_outline: outline_link("districts", &district.name_en),
        geojson_with_assemblies: with_children_link("districts", "assemblies", &district.name_en),
        assemblies: assemblies
            .iter()
            .map(|a| AssemblySummary {
                id: a.id,
                name_en: a.name_en.clone(),
                name_ml: ml_or_en(&a.name_ml, &a.name_en),
                category: category_for(&categories.assemblies, a.id),
            })
            .collect(),
    }
}

fn district_parent(
    district: Option<&DistrictRow>,
    categories: &CategoryMaps,
) -> ParentSummary {
    match district {
        Some(d) => ParentSummary {
            id: Some(d.id),
            name_en: Some(d.name_en.clone()),
            name_ml: Some(ml_or_en(&d.name_ml, &d.name_en)),
            category: category_for(&categories.districts, d.id),
        },
        None => ParentSummary::empty(),
    }
}

fn assembly_parent(
    assembly: Option<&AssemblyRow>,
    categories: &CategoryMaps,
) -> ParentSummary {
    match assembly {
        Some(a) => ParentSummary {
            id: Some(a.id),
            name_en: Some(a.name_en.clone()),
            name_ml: Some(ml_or_en(&a.name_ml, &a.name_en)),
            category: category_for(&categories.assemblies, a.id),
        },
        None => ParentSummary::empty(),
    }
}

/// Assembly document: own fields, embedded parent district (empty-fielded
/// when the reference does not resolve), and each local body with its
/// category.
pub fn build_assembly_document(
    assembly: &AssemblyRow,
    local_bodies: &[LocalBodyRow],
    parent_district: Option<&DistrictRow>,
    categories: &CategoryMaps,
) -> AssemblyDocument {
    AssemblyDocument {
        id: assembly.id,
        name_en: assembly.name_en.clone(),
        name_ml: ml_or_en(&assembly.name_ml, &assembly.name_en),
        is_active: assembly.is_active,
        category: category_for(&categories.assemblies, assembly.id),
        district: district_parent(parent_district, categories),
        geojson_outline: outline_link("assemblies", &assembly.name_en),
        geojson_with_local_bodies: with_children_link(
            "assemblies",
            "local-bodies",
            &assembly.name_en,
        ),
        local_bodies: local_bodies
            .iter()
            .map(|lb| LocalBodySummary {
                id: lb.id,
                name_en: lb.name_en.clone(),
                name_ml: ml_or_en(&lb.name_ml, &lb.name_en),
                category: category_for(&categories.local_bodies, lb.id),
            })
            .collect(),
    }
}

/// Local body document: the deepest document, carrying wards with their
/// current collection rate, towns, and grouped issues.
///
/// `current_rates` is the per-ward latest-value map produced by
/// [`crate::services::latest::latest_rate_per_ward`].
#[allow(clippy::too_many_arguments)]
pub fn build_local_body_document(
    local_body: &LocalBodyRow,
    wards: &[WardRow],
    towns: &[TownRow],
    issues: &[IssueRow],
    current_rates: &HashMap<i64, CollectionRateRow>,
    parent_assembly: Option<&AssemblyRow>,
    parent_district: Option<&DistrictRow>,
    categories: &CategoryMaps,
) -> LocalBodyDocument {
    let local_body_type = local_body.type_name_en.as_ref().map(|en| LocalBodyTypeSummary {
        name_en: en.clone(),
        name_ml: ml_or_en(&local_body.type_name_ml, en),
    });

    let ward_documents = wards
        .iter()
        .map(|w| WardDocument {
            id: w.id,
            ward_no: w.ward_no,
            name_en: w.name_en.clone(),
            name_ml: ml_or_en(&w.name_ml, &w.name_en),
            ward_collection: current_rates.get(&w.id).map(|r| WardCollectionDocument {
                collection_id: r.collection_id,
                year_month: r.year_month.clone().unwrap_or_default(),
                rate: r.rate,
            }),
        })
        .collect();

    LocalBodyDocument {
        id: local_body.id,
        name_en: local_body.name_en.clone(),
        name_ml: ml_or_en(&local_body.name_ml, &local_body.name_en),
        local_body_type,
        category: category_for(&categories.local_bodies, local_body.id),
        assembly: assembly_parent(parent_assembly, categories),
        district: district_parent(parent_district, categories),
        geojson_outline: outline_link("local-bodies", &local_body.name_en),
        geojson_with_wards: with_children_link("local-bodies", "wards", &local_body.name_en),
        wards: ward_documents,
        towns: towns
            .iter()
            .map(|t| TownSummary {
                name_en: t.name_en.clone(),
                name_ml: ml_or_en(&t.name_ml, &t.name_en),
            })
            .collect(),
        issues: group_issues(issues, towns),
    }
}

// ============================================================================
// Issue grouping
// ============================================================================

fn issue_document(issue: &IssueRow, issue_type: IssueType) -> IssueDocument {
    IssueDocument {
        id: issue.id,
        issue_type,
        description: issue.description.clone(),
        image_url: issue.image_url.clone(),
        location_url: issue.location_url.clone(),
        resolved: issue.resolved,
        town_id: issue.town_id,
        created_at: issue.created_at,
    }
}

/// Group a local body's issues into the three map-rendered types.
///
/// Town-type issues group per referenced town id; unresolved references
/// share one "Unknown" group so two distinct towns with the same display
/// name never merge. Groups are ordered by name with the unknown group
/// last. Issue types outside the three groups are not folded into
/// documents.
fn group_issues(issues: &[IssueRow], towns: &[TownRow]) -> IssueGroups {
    let town_by_id: HashMap<i64, &TownRow> = towns.iter().map(|t| (t.id, t)).collect();

    let mut town_groups: Vec<TownIssueGroup> = Vec::new();
    let mut group_index: HashMap<Option<i64>, usize> = HashMap::new();
    let mut bus_stop = Vec::new();
    let mut water_body = Vec::new();

    for issue in issues {
        let Some(issue_type) = IssueType::parse(&issue.issue_type) else {
            continue;
        };

        match issue_type {
            IssueType::Town => {
                let town = issue.town_id.and_then(|id| town_by_id.get(&id).copied());
                let key = town.map(|t| t.id);

                let index = *group_index.entry(key).or_insert_with(|| {
                    town_groups.push(TownIssueGroup {
                        town_id: key,
                        name_en: town
                            .map(|t| t.name_en.clone())
                            .unwrap_or_else(|| UNKNOWN_TOWN.to_string()),
                        name_ml: town
                            .map(|t| ml_or_en(&t.name_ml, &t.name_en))
                            .unwrap_or_else(|| UNKNOWN_TOWN.to_string()),
                        issues: Vec::new(),
                    });
                    town_groups.len() - 1
                });
                town_groups[index].issues.push(issue_document(issue, issue_type));
            }
            IssueType::BusStop => bus_stop.push(issue_document(issue, issue_type)),
            IssueType::WaterBody => water_body.push(issue_document(issue, issue_type)),
            _ => {}
        }
    }

    town_groups.sort_by_key(|g| (g.town_id.is_none(), g.name_en.to_lowercase()));

    IssueGroups {
        town: town_groups,
        bus_stop,
        water_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn district(id: i64, name_en: &str) -> DistrictRow {
        DistrictRow {
            id,
            name_en: name_en.to_string(),
            name_ml: None,
            is_active: true,
        }
    }

    fn assembly(id: i64, name_en: &str, district_id: i64) -> AssemblyRow {
        AssemblyRow {
            id,
            name_en: name_en.to_string(),
            name_ml: None,
            district_id,
            is_active: true,
        }
    }

    fn local_body(id: i64, name_en: &str, assembly_id: i64) -> LocalBodyRow {
        LocalBodyRow {
            id,
            name_en: name_en.to_string(),
            name_ml: None,
            assembly_id,
            type_id: Some(1),
            type_name_en: Some("Municipality".to_string()),
            type_name_ml: None,
        }
    }

    fn ward(id: i64, ward_no: i32, local_body_id: i64) -> WardRow {
        WardRow {
            id,
            ward_no,
            name_en: format!("Ward {}", ward_no),
            name_ml: None,
            local_body_id,
        }
    }

    fn town(id: i64, name_en: &str, local_body_id: i64) -> TownRow {
        TownRow {
            id,
            name_en: name_en.to_string(),
            name_ml: None,
            local_body_id,
            lat: 8.5,
            lng: 76.9,
        }
    }

    fn town_issue(town_id: Option<i64>, local_body_id: i64) -> IssueRow {
        IssueRow {
            id: Uuid::now_v7(),
            local_body_id,
            issue_type: "town".to_string(),
            description: "overflowing bin".to_string(),
            image_url: None,
            location_url: None,
            resolved: false,
            town_id,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_slug_simple_name() {
        assert_eq!(
            to_filename("Thiruvananthapuram South"),
            "thiruvananthapuram-south"
        );
    }

    #[test]
    fn test_slug_strips_and_collapses() {
        let slug = to_filename("Āl--  Bé@@");
        assert!(!slug.is_empty());
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert!(!slug.contains("--"));
        assert_eq!(slug, "l-b");
    }

    #[test]
    fn test_slug_is_deterministic_across_levels() {
        // The exporter and live paths must derive one stable file key.
        let name = "Nedumangad  (Rural)";
        assert_eq!(to_filename(name), to_filename(name));
        assert_eq!(to_filename(name), "nedumangad-rural");
    }

    #[test]
    fn test_state_document_defaults_missing_category_to_normal() {
        let districts = vec![district(1, "Kollam"), district(2, "Idukki")];
        let mut categories = HashMap::new();
        categories.insert(1, CategoryLabel::Perfect);

        let doc = build_state_document(&districts, &categories);

        assert_eq!(doc.name_en, STATE_NAME_EN);
        assert_eq!(doc.geojson_outline, "geojson/states/outlines/kerala.geojson");
        assert_eq!(
            doc.geojson_with_districts,
            "geojson/states/with-districts/kerala.geojson"
        );
        assert_eq!(doc.districts[0].category, CategoryLabel::Perfect);
        // No category row: Normal, never null or absent.
        assert_eq!(doc.districts[1].category, CategoryLabel::Normal);
    }

    #[test]
    fn test_district_document_links_and_children() {
        let d = district(1, "Thiruvananthapuram");
        let assemblies = vec![assembly(11, "Kazhakootam", 1), assembly(12, "Nemom", 1)];
        let mut categories = CategoryMaps::default();
        categories.assemblies.insert(12, CategoryLabel::Good);

        let doc = build_district_document(&d, &assemblies, &categories);

        assert_eq!(
            doc.geojson_outline,
            "geojson/districts/outlines/thiruvananthapuram.geojson"
        );
        assert_eq!(
            doc.geojson_with_assemblies,
            "geojson/districts/with-assemblies/thiruvananthapuram.geojson"
        );
        assert_eq!(doc.assemblies.len(), 2);
        assert_eq!(doc.assemblies[0].category, CategoryLabel::Normal);
        assert_eq!(doc.assemblies[1].category, CategoryLabel::Good);
    }

    #[test]
    fn test_assembly_document_embeds_parent_district() {
        let d = district(1, "Kollam");
        let a = assembly(11, "Chavara", 1);
        let doc = build_assembly_document(&a, &[], Some(&d), &CategoryMaps::default());

        assert_eq!(doc.district.id, Some(1));
        assert_eq!(doc.district.name_en.as_deref(), Some("Kollam"));
        assert!(doc.local_bodies.is_empty());
    }

    #[test]
    fn test_orphan_local_body_still_builds() {
        // assembly_id matches no assembly row; the parents render empty.
        let lb = local_body(100, "Orphaned", 999);
        let doc = build_local_body_document(
            &lb,
            &[],
            &[],
            &[],
            &HashMap::new(),
            None,
            None,
            &CategoryMaps::default(),
        );

        assert_eq!(doc.assembly, ParentSummary::empty());
        assert_eq!(doc.district, ParentSummary::empty());
        assert_eq!(doc.assembly.category, CategoryLabel::Normal);
        assert!(doc.wards.is_empty());
    }

    #[test]
    fn test_local_body_document_end_to_end() {
        // D1 -> A1 -> L1 -> [W1, W2]; W1 has rates for 2024-05 and 2024-06.
        let d1 = district(1, "D1");
        let a1 = assembly(11, "A1", 1);
        let l1 = local_body(21, "L1", 11);
        let wards = vec![ward(31, 1, 21), ward(32, 2, 21)];
        let rates = vec![
            CollectionRateRow {
                collection_id: 1,
                ward_id: 31,
                year_month: Some("2024-05".to_string()),
                rate: 80.0,
            },
            CollectionRateRow {
                collection_id: 2,
                ward_id: 31,
                year_month: Some("2024-06".to_string()),
                rate: 92.0,
            },
        ];
        let current = crate::services::latest::latest_rate_per_ward(&rates);

        let doc = build_local_body_document(
            &l1,
            &wards,
            &[],
            &[],
            &current,
            Some(&a1),
            Some(&d1),
            &CategoryMaps::default(),
        );

        let w1 = &doc.wards[0];
        let w2 = &doc.wards[1];
        let collection = w1.ward_collection.as_ref().expect("W1 has a current rate");
        assert_eq!(collection.year_month, "2024-06");
        assert!((collection.rate - 92.0).abs() < f32::EPSILON);
        assert_eq!(w2.ward_collection, None);
        assert_eq!(doc.assembly.id, Some(11));
        assert_eq!(doc.district.id, Some(1));
        assert_eq!(
            doc.local_body_type.as_ref().map(|t| t.name_en.as_str()),
            Some("Municipality")
        );
    }

    #[test]
    fn test_town_issues_group_by_referenced_town() {
        let towns = vec![town(51, "Market Town", 21)];
        let issues = vec![
            town_issue(Some(51), 21),
            town_issue(Some(51), 21),
            town_issue(Some(404), 21),
        ];

        let groups = group_issues(&issues, &towns);

        assert_eq!(groups.town.len(), 2);
        let market = &groups.town[0];
        assert_eq!(market.name_en, "Market Town");
        assert_eq!(market.town_id, Some(51));
        assert_eq!(market.issues.len(), 2);

        let unknown = &groups.town[1];
        assert_eq!(unknown.name_en, UNKNOWN_TOWN);
        assert_eq!(unknown.town_id, None);
        assert_eq!(unknown.issues.len(), 1);
    }

    #[test]
    fn test_same_name_towns_do_not_merge() {
        let towns = vec![town(51, "Market Town", 21), town(52, "Market Town", 21)];
        let issues = vec![town_issue(Some(51), 21), town_issue(Some(52), 21)];

        let groups = group_issues(&issues, &towns);

        assert_eq!(groups.town.len(), 2);
        assert_eq!(groups.town[0].issues.len(), 1);
        assert_eq!(groups.town[1].issues.len(), 1);
    }

    #[test]
    fn test_non_grouped_issue_types_are_excluded() {
        let mut road = town_issue(None, 21);
        road.issue_type = "road".to_string();
        let mut bus = town_issue(None, 21);
        bus.issue_type = "bus_stop".to_string();
        let mut water = town_issue(None, 21);
        water.issue_type = "water_body".to_string();

        let groups = group_issues(&[road, bus, water], &[]);

        assert!(groups.town.is_empty());
        assert_eq!(groups.bus_stop.len(), 1);
        assert_eq!(groups.water_body.len(), 1);
    }

    #[test]
    fn test_name_fallback_to_english() {
        let mut d = district(1, "Wayanad");
        d.name_ml = None;
        let doc = build_state_document(&[d], &HashMap::new());
        assert_eq!(doc.districts[0].name_ml, "Wayanad");
    }
}
