//! Issue reporting endpoints.

use actix_web::{HttpResponse, patch, post, web};
use uuid::Uuid;

use crate::db::rows::IssueRow;
use crate::db::{DbPool, issues, local_bodies};
use crate::error::{AppError, AppResult};
use crate::models::{CreateIssueRequest, IssueResponse, IssueType, UpdateIssueRequest};

/// Configure issue routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_issue).service(update_issue);
}

fn to_response(row: IssueRow) -> IssueResponse {
    IssueResponse {
        id: row.id,
        local_body_id: row.local_body_id,
        issue_type: IssueType::parse(&row.issue_type).unwrap_or(IssueType::Town),
        description: row.description,
        image_url: row.image_url,
        location_url: row.location_url,
        resolved: row.resolved,
        town_id: row.town_id,
        created_at: row.created_at,
    }
}

/// Report a new issue.
///
/// POST /issues
#[utoipa::path(
    post,
    path = "/api/v1/issues",
    tag = "Issues",
    request_body = CreateIssueRequest,
    responses(
        (status = 201, description = "Issue created", body = IssueResponse),
        (status = 400, description = "Invalid issue", body = crate::error::ErrorResponse),
        (status = 404, description = "Local body not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/issues")]
pub async fn create_issue(
    pool: web::Data<DbPool>,
    body: web::Json<CreateIssueRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();

    if request.description.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Description must not be empty".to_string(),
        ));
    }

    // The reported local body must exist; town references stay soft.
    local_bodies::by_id(pool.connection(), request.local_body_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Local body {}", request.local_body_id))
        })?;

    let row = issues::insert(pool.connection(), &request).await?;

    Ok(HttpResponse::Created().json(to_response(row)))
}

/// Update an issue's resolved flag.
///
/// PATCH /issues/{id}
#[utoipa::path(
    patch,
    path = "/api/v1/issues/{id}",
    tag = "Issues",
    params(
        ("id" = Uuid, Path, description = "Issue UUID")
    ),
    request_body = UpdateIssueRequest,
    responses(
        (status = 200, description = "Issue updated", body = IssueResponse),
        (status = 404, description = "Issue not found", body = crate::error::ErrorResponse)
    )
)]
#[patch("/issues/{id}")]
pub async fn update_issue(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: web::Json<UpdateIssueRequest>,
) -> AppResult<HttpResponse> {
    let id = Uuid::parse_str(&path.into_inner())?;
    let row = issues::set_resolved(pool.connection(), id, body.resolved).await?;

    Ok(HttpResponse::Ok().json(to_response(row)))
}
