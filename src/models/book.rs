//! Book (catalog) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author: String,
    pub category: String,
    pub rating: f64,
    pub image: Option<String>,
    /// Copies currently on the shelf
    pub quantity: i32,
}

/// Catalog search filters, as sent by the web client
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    /// Case-insensitive substring match on the book name
    pub search: Option<String>,
    /// Exact, case-sensitive category equality
    pub category_name: Option<String>,
    /// "inLibrary" (quantity > 0), "outOfLibrary" (quantity = 0), anything else lists all
    pub availability: Option<String>,
    /// Restrict to a single book id
    pub id: Option<i32>,
    /// Redundant identity assertion, must match the token email when present
    pub email: Option<String>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub name: String,
    pub author: String,
    pub category: String,
    pub rating: f64,
    pub image: Option<String>,
    pub quantity: i32,
    /// Redundant identity assertion, must match the token email when present
    pub user_email: Option<String>,
}

/// Replace book fields request. Quantity is owned by the borrow ledger and
/// is never replaced through this path.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub name: String,
    pub author: String,
    pub category: String,
    pub rating: f64,
    pub image: Option<String>,
}

/// Book listing response with the total catalog size
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    pub books: Vec<Book>,
    pub total: i64,
}
