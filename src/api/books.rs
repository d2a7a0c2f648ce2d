//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookListResponse, BookQuery, CreateBook, UpdateBook},
};

use super::AuthenticatedUser;

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/allBooks",
    tag = "books",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring match on the book name"),
        ("categoryName" = Option<String>, Query, description = "Exact category match"),
        ("availability" = Option<String>, Query, description = "inLibrary or outOfLibrary"),
        ("id" = Option<i32>, Query, description = "Restrict to a single book id"),
        ("email" = Option<String>, Query, description = "Must match the token email when present")
    ),
    responses(
        (status = 200, description = "Matching books and the total catalog size", body = BookListResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Email does not match the token identity")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BookListResponse>> {
    if let Some(ref email) = query.email {
        claims.require_self(email)?;
    }

    let (books, total) = state.services.catalog.search_books(&query).await?;
    Ok(Json(BookListResponse { books, total }))
}

/// Insert a new book
#[utoipa::path(
    post,
    path = "/allBooks",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Email does not match the token identity")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    if let Some(ref email) = request.user_email {
        claims.require_self(email)?;
    }

    let created = state.services.catalog.create_book(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the descriptive fields of a book, inserting it when absent
#[utoipa::path(
    put,
    path = "/allBooks/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book replaced", body = Book)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(id, request).await?;
    Ok(Json(updated))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBooksParams {
    pub category_name: Option<String>,
}

/// List all books of one category
#[utoipa::path(
    get,
    path = "/allCategoryBook",
    tag = "books",
    params(
        ("categoryName" = String, Query, description = "Category name, exact match")
    ),
    responses(
        (status = 200, description = "Books of the category", body = Vec<Book>),
        (status = 400, description = "Missing category name")
    )
)]
pub async fn list_category_books(
    State(state): State<crate::AppState>,
    Query(params): Query<CategoryBooksParams>,
) -> AppResult<Json<Vec<Book>>> {
    let category = params
        .category_name
        .ok_or_else(|| AppError::BadRequest("Category name is required".to_string()))?;

    let books = state.services.catalog.get_category_books(&category).await?;
    Ok(Json(books))
}

#[derive(Deserialize)]
pub struct SingleBookParams {
    pub id: Option<i32>,
}

/// Get a single book by id
#[utoipa::path(
    get,
    path = "/singleBook",
    tag = "books",
    params(
        ("id" = i32, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Missing book id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_single_book(
    State(state): State<crate::AppState>,
    Query(params): Query<SingleBookParams>,
) -> AppResult<Json<Book>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Book id is required".to_string()))?;

    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}
