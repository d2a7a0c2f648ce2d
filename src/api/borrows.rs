//! Borrow ledger endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::borrow::{BorrowDetails, BorrowRecord, BorrowRequest},
};

use super::AuthenticatedUser;

#[derive(Deserialize)]
pub struct BorrowedListParams {
    /// Redundant identity assertion, must match the token email when present
    pub email: Option<String>,
}

/// Return acknowledgement
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub status: String,
}

/// List the authenticated user's outstanding borrows
#[utoipa::path(
    get,
    path = "/borrowedBook",
    tag = "borrows",
    params(
        ("email" = Option<String>, Query, description = "Must match the token email when present")
    ),
    responses(
        (status = 200, description = "Outstanding borrows with book details", body = Vec<BorrowDetails>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Email does not match the token identity")
    )
)]
pub async fn list_borrowed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<BorrowedListParams>,
) -> AppResult<Json<Vec<BorrowDetails>>> {
    if let Some(ref email) = params.email {
        claims.require_self(email)?;
    }

    let borrows = state
        .services
        .circulation
        .get_user_borrows(claims.email())
        .await?;
    Ok(Json(borrows))
}

/// Borrow a book for the authenticated user
#[utoipa::path(
    post,
    path = "/borrowBook",
    tag = "borrows",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Borrow recorded, one copy off the shelf", body = BorrowRecord),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book already borrowed by this user"),
        (status = 422, description = "No copies available")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowRecord>)> {
    if let Some(ref email) = request.user_email {
        claims.require_self(email)?;
    }

    let record = state
        .services
        .circulation
        .borrow(request.book_id, claims.email())
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Return a borrowed book by borrow record id
#[utoipa::path(
    delete,
    path = "/borrowedBook/{id}",
    tag = "borrows",
    params(
        ("id" = i32, Path, description = "Borrow record ID")
    ),
    responses(
        (status = 200, description = "Borrow deleted, one copy back on the shelf", body = ReturnResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such borrow record for this user")
    )
)]
pub async fn return_borrowed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ReturnResponse>> {
    state
        .services
        .circulation
        .return_borrow(id, claims.email())
        .await?;

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
    }))
}
