//! Read-only lookup of city reference data.

use crate::{errors::ApiError, models::City};
use sqlx::SqlitePool;

/// Read-only access to the `cities` table
///
/// No caching and no mutation path: city rows are seeded out of band and
/// treated as immutable by the request path.
#[derive(Clone)]
pub struct CityStore {
    pool: SqlitePool,
}

impl CityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch a city by primary key
    ///
    /// Returns `ApiError::NotFound` when no row matches.
    pub async fn get(&self, id: i64) -> Result<City, ApiError> {
        let city =
            sqlx::query_as::<_, City>("SELECT id, name, latitude, longitude FROM cities WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        city.ok_or_else(|| ApiError::not_found("City not found"))
    }
}
