//! Collection-rate update endpoint (the officials' quick action).

use actix_web::{HttpResponse, put, web};

use crate::db::{DbPool, collection_rates, wards};
use crate::error::{AppError, AppResult};
use crate::models::requests::is_valid_period_key;
use crate::models::{CollectionRateResponse, UpsertCollectionRateRequest};

/// Configure collection-rate routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upsert_collection_rate);
}

/// Upsert the collection rate for one ward and period.
///
/// PUT /wards/{ward_id}/collection-rate
#[utoipa::path(
    put,
    path = "/api/v1/wards/{ward_id}/collection-rate",
    tag = "Collection Rates",
    params(
        ("ward_id" = i64, Path, description = "Ward id")
    ),
    request_body = UpsertCollectionRateRequest,
    responses(
        (status = 200, description = "Rate stored", body = CollectionRateResponse),
        (status = 400, description = "Invalid rate or period", body = crate::error::ErrorResponse),
        (status = 404, description = "Ward not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/wards/{ward_id}/collection-rate")]
pub async fn upsert_collection_rate(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<UpsertCollectionRateRequest>,
) -> AppResult<HttpResponse> {
    let ward_id = path.into_inner();
    let request = body.into_inner();

    // The write boundary enforces what the aggregator assumes.
    if !(0.0..=100.0).contains(&request.rate) {
        return Err(AppError::InvalidInput(
            "Rate must be between 0 and 100".to_string(),
        ));
    }
    if !is_valid_period_key(&request.year_month) {
        return Err(AppError::InvalidInput(format!(
            "Period key '{}' is not a zero-padded YYYY-MM or YYYY-MM-DD string",
            request.year_month
        )));
    }

    wards::by_id(pool.connection(), ward_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ward {}", ward_id)))?;

    let row =
        collection_rates::upsert(pool.connection(), ward_id, &request.year_month, request.rate)
            .await?;

    Ok(HttpResponse::Ok().json(CollectionRateResponse {
        collection_id: row.collection_id,
        ward_id: row.ward_id,
        year_month: row.year_month.unwrap_or_default(),
        rate: row.rate,
    }))
}
