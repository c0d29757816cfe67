//! Live document endpoints for the region hierarchy.

use actix_web::{HttpResponse, get, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{AssemblyDocument, DistrictDocument, LocalBodyDocument, StateDocument};
use crate::services::live;

/// Configure region document routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_state)
        .service(get_district)
        .service(get_assembly)
        .service(get_local_body);
}

/// Get the state document.
///
/// GET /state
#[utoipa::path(
    get,
    path = "/api/v1/state",
    tag = "Regions",
    responses(
        (status = 200, description = "State document with all districts", body = StateDocument)
    )
)]
#[get("/state")]
pub async fn get_state(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let document = live::state_document(pool.connection()).await?;
    Ok(HttpResponse::Ok().json(document))
}

/// Get one district document.
///
/// GET /districts/{id}
#[utoipa::path(
    get,
    path = "/api/v1/districts/{id}",
    tag = "Regions",
    params(
        ("id" = i64, Path, description = "District id")
    ),
    responses(
        (status = 200, description = "District document", body = DistrictDocument),
        (status = 404, description = "District not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/districts/{id}")]
pub async fn get_district(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let document = live::district_document(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(document))
}

/// Get one assembly document.
///
/// GET /assemblies/{id}
#[utoipa::path(
    get,
    path = "/api/v1/assemblies/{id}",
    tag = "Regions",
    params(
        ("id" = i64, Path, description = "Assembly id")
    ),
    responses(
        (status = 200, description = "Assembly document", body = AssemblyDocument),
        (status = 404, description = "Assembly not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/assemblies/{id}")]
pub async fn get_assembly(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let document = live::assembly_document(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(document))
}

/// Get one local body document.
///
/// GET /local-bodies/{id}
#[utoipa::path(
    get,
    path = "/api/v1/local-bodies/{id}",
    tag = "Regions",
    params(
        ("id" = i64, Path, description = "Local body id")
    ),
    responses(
        (status = 200, description = "Local body document", body = LocalBodyDocument),
        (status = 404, description = "Local body not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/local-bodies/{id}")]
pub async fn get_local_body(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let document = live::local_body_document(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(document))
}
