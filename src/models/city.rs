//! City reference data.

use serde::{Deserialize, Serialize};

/// A city row from the `cities` table
///
/// Immutable reference data: created out of band, never mutated or deleted
/// by the request path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
