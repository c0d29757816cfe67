//! Database queries for issues.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::rows::IssueRow;
use crate::entity::issue::{self, ActiveModel, Entity as Issue};
use crate::error::{AppError, AppResult};
use crate::models::CreateIssueRequest;

/// All issues of one local body, newest first.
pub async fn by_local_body(db: &DatabaseConnection, local_body_id: i64) -> AppResult<Vec<IssueRow>> {
    let models = Issue::find()
        .filter(issue::Column::LocalBodyId.eq(local_body_id))
        .order_by_desc(issue::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| {
            AppError::Database(format!(
                "Failed to list issues of local body {}: {}",
                local_body_id, e
            ))
        })?;

    Ok(models.into_iter().map(IssueRow::from).collect())
}

/// Insert a new citizen-reported issue.
pub async fn insert(db: &DatabaseConnection, request: &CreateIssueRequest) -> AppResult<IssueRow> {
    let model = ActiveModel {
        id: Set(Uuid::now_v7()),
        local_body_id: Set(request.local_body_id),
        issue_type: Set(request.issue_type.as_str().to_string()),
        description: Set(request.description.clone()),
        image_url: Set(request.image_url.clone()),
        location_url: Set(request.location_url.clone()),
        resolved: Set(false),
        town_id: Set(request.town_id),
        created_at: Set(Utc::now()),
    };

    let result = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert issue: {}", e)))?;

    Ok(IssueRow::from(result))
}

/// Update an issue's resolved flag.
pub async fn set_resolved(
    db: &DatabaseConnection,
    id: Uuid,
    resolved: bool,
) -> AppResult<IssueRow> {
    let issue = Issue::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get issue {}: {}", id, e)))?
        .ok_or_else(|| AppError::NotFound(format!("Issue {}", id)))?;

    let mut active: ActiveModel = issue.into();
    active.resolved = Set(resolved);

    let result = active
        .update(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update issue {}: {}", id, e)))?;

    Ok(IssueRow::from(result))
}
