//! Database module providing connection management and queries.

pub mod assemblies;
pub mod categories;
pub mod collection_rates;
pub mod districts;
pub mod issues;
pub mod local_bodies;
pub mod rows;
pub mod towns;
pub mod wards;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Row cap of a single read against the store; full-table reads page in
/// chunks of this size until a short page is returned.
pub const EXPORT_PAGE_SIZE: u64 = 1000;

/// Database connection wrapper shared across handlers.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.max_connections(10).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Get the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

/// Collect pages from `fetch` until a short page signals the end.
///
/// Page indices are passed in order starting from zero; the loop never
/// issues two fetches concurrently, so a failing page aborts the whole
/// collection with no partial result.
pub async fn collect_pages<T, F>(page_size: u64, mut fetch: F) -> AppResult<Vec<T>>
where
    F: AsyncFnMut(u64) -> AppResult<Vec<T>>,
{
    let mut rows = Vec::new();
    for page in 0.. {
        let batch = fetch(page).await?;
        let done = (batch.len() as u64) < page_size;
        rows.extend(batch);
        if done {
            break;
        }
    }
    Ok(rows)
}

/// Fetch every row of a select as raw JSON, paging at [`EXPORT_PAGE_SIZE`].
///
/// Callers must order the select by a stable column so pages do not overlap.
pub async fn fetch_all_json<E>(
    db: &DatabaseConnection,
    select: sea_orm::Select<E>,
) -> AppResult<Vec<JsonValue>>
where
    E: EntityTrait,
{
    let paginator = select.into_json().paginate(db, EXPORT_PAGE_SIZE);
    collect_pages(EXPORT_PAGE_SIZE, async |page| {
        paginator
            .fetch_page(page)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch page {}: {}", page, e)))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic store: full pages of 1000 until `total` rows are served.
    async fn run_collect(total: usize) -> Vec<u64> {
        collect_pages(EXPORT_PAGE_SIZE, async |page| {
            let start = (page * EXPORT_PAGE_SIZE) as usize;
            let end = (start + EXPORT_PAGE_SIZE as usize).min(total);
            Ok((start..end).map(|i| i as u64).collect())
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_collect_pages_concatenates_without_gaps() {
        // 1000 + 1000 + 400 across three pages
        let rows = run_collect(2400).await;
        assert_eq!(rows.len(), 2400);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(*row, i as u64);
        }
    }

    #[tokio::test]
    async fn test_collect_pages_single_short_page() {
        let rows = run_collect(7).await;
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_collect_pages_exact_page_boundary() {
        // A final full page forces one extra (empty) fetch, never a missing row.
        let rows = run_collect(1000).await;
        assert_eq!(rows.len(), 1000);
    }

    #[tokio::test]
    async fn test_collect_pages_empty() {
        let rows = run_collect(0).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_collect_pages_propagates_errors() {
        let result: AppResult<Vec<u64>> = collect_pages(EXPORT_PAGE_SIZE, async |page| {
            if page == 1 {
                Err(AppError::Database("boom".to_string()))
            } else {
                Ok((0..EXPORT_PAGE_SIZE).collect())
            }
        })
        .await;
        assert!(result.is_err());
    }
}
