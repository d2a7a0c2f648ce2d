//! Borrow record (ledger) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Borrow ledger entry from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: i32,
    pub book_id: i32,
    pub user_email: String,
    pub borrowed_at: DateTime<Utc>,
}

/// Borrow record joined with its book for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowDetails {
    pub id: i32,
    pub user_email: String,
    pub borrowed_at: DateTime<Utc>,
    pub book: Book,
}

/// Borrow request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub book_id: i32,
    /// Redundant identity assertion, must match the token email when present
    pub user_email: Option<String>,
}
