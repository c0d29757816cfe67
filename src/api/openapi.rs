//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, services};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Civic Atlas Server",
        version = "0.3.0",
        description = "Civic-data API: region hierarchy documents, citizen issue reports, and ward collection rates"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Region documents
        api::regions::get_state,
        api::regions::get_district,
        api::regions::get_assembly,
        api::regions::get_local_body,
        // Issues
        api::issues::create_issue,
        api::issues::update_issue,
        // Collection rates
        api::collection_rates::upsert_collection_rate,
        // Uploads
        services::upload::upload_to_r2,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Documents
            models::CategoryLabel,
            models::StateDocument,
            models::DistrictSummary,
            models::DistrictDocument,
            models::AssemblySummary,
            models::AssemblyDocument,
            models::LocalBodySummary,
            models::LocalBodyDocument,
            models::LocalBodyTypeSummary,
            models::ParentSummary,
            models::WardDocument,
            models::WardCollectionDocument,
            models::TownSummary,
            models::TownIssueGroup,
            models::IssueGroups,
            models::IssueDocument,
            // Issues
            models::IssueType,
            models::CreateIssueRequest,
            models::UpdateIssueRequest,
            models::IssueResponse,
            // Collection rates
            models::UpsertCollectionRateRequest,
            models::CollectionRateResponse,
            // Uploads
            services::upload::UploadResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Regions", description = "Denormalized region documents"),
        (name = "Issues", description = "Citizen issue reports"),
        (name = "Collection Rates", description = "Ward collection-rate updates"),
        (name = "Uploads", description = "Issue photo upload proxy")
    )
)]
pub struct ApiDoc;
