//! SeaORM entity definitions for PostgreSQL database.

pub mod assembly;
pub mod assembly_category;
pub mod district;
pub mod district_category;
pub mod issue;
pub mod local_body;
pub mod local_body_category;
pub mod local_body_type;
pub mod town;
pub mod ward;
pub mod ward_collection_rate;
