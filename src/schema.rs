//! Schema registry: logical entity/field names mapped to the physical
//! table and column identifiers of the external store.
//!
//! Raw-row projections in [`crate::db::rows`] look fields up through these
//! constants instead of scattering string literals. A lookup that does not
//! exist here is a compile error, not a runtime one.

pub mod districts {
    pub const TABLE: &str = "districts";
    pub const ID: &str = "id";
    pub const NAME_EN: &str = "name_en";
    pub const NAME_ML: &str = "name_ml";
    pub const IS_ACTIVE: &str = "is_active";
}

pub mod assemblies {
    pub const TABLE: &str = "assemblies";
    pub const ID: &str = "id";
    pub const NAME_EN: &str = "name_en";
    pub const NAME_ML: &str = "name_ml";
    pub const DISTRICT_ID: &str = "district_id";
    pub const IS_ACTIVE: &str = "is_active";
}

pub mod local_bodies {
    pub const TABLE: &str = "local_bodies";
    pub const ID: &str = "id";
    pub const NAME_EN: &str = "name_en";
    pub const NAME_ML: &str = "name_ml";
    pub const ASSEMBLY_ID: &str = "assembly_id";
    pub const TYPE_ID: &str = "type_id";
    pub const TYPE_NAME_EN: &str = "type_name_en";
    pub const TYPE_NAME_ML: &str = "type_name_ml";
}

pub mod local_body_types {
    pub const TABLE: &str = "local_body_types";
    pub const ID: &str = "id";
    pub const NAME_EN: &str = "name_en";
    pub const NAME_ML: &str = "name_ml";
}

pub mod wards {
    pub const TABLE: &str = "wards";
    pub const ID: &str = "id";
    pub const WARD_NO: &str = "ward_no";
    pub const NAME_EN: &str = "name_en";
    pub const NAME_ML: &str = "name_ml";
    pub const LOCAL_BODY_ID: &str = "local_body_id";
}

pub mod ward_collection_rates {
    pub const TABLE: &str = "ward_collection_rates";
    pub const COLLECTION_ID: &str = "collection_id";
    pub const WARD_ID: &str = "ward_id";
    pub const YEAR_MONTH: &str = "year_month";
    pub const RATE: &str = "rate";
}

pub mod towns {
    pub const TABLE: &str = "towns";
    pub const ID: &str = "id";
    pub const NAME_EN: &str = "name_en";
    pub const NAME_ML: &str = "name_ml";
    pub const LOCAL_BODY_ID: &str = "local_body_id";
    pub const LAT: &str = "lat";
    pub const LNG: &str = "lng";
}

pub mod issues {
    pub const TABLE: &str = "issues";
    pub const ID: &str = "id";
    pub const LOCAL_BODY_ID: &str = "local_body_id";
    pub const ISSUE_TYPE: &str = "issue_type";
    pub const DESCRIPTION: &str = "description";
    pub const IMAGE_URL: &str = "image_url";
    pub const LOCATION_URL: &str = "location_url";
    pub const RESOLVED: &str = "resolved";
    pub const TOWN_ID: &str = "town_id";
    pub const CREATED_AT: &str = "created_at";
}

pub mod district_categories {
    pub const TABLE: &str = "district_categories";
    pub const DISTRICT_ID: &str = "district_id";
    pub const CATEGORY: &str = "category";
}

pub mod assembly_categories {
    pub const TABLE: &str = "assembly_categories";
    pub const ASSEMBLY_ID: &str = "assembly_id";
    pub const CATEGORY: &str = "category";
}

pub mod local_body_categories {
    pub const TABLE: &str = "local_body_categories";
    pub const LOCAL_BODY_ID: &str = "local_body_id";
    pub const CATEGORY: &str = "category";
}
