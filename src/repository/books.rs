//! Book catalog repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

fn escape(s: &str) -> String {
    s.replace('\'', "''")
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, name, author, category, rating, image, quantity FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Search the catalog with the client's optional filters.
    /// The returned total is the whole catalog count, not the filtered count.
    pub async fn search(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64)> {
        let mut conditions = vec!["1=1".to_string()];

        if let Some(ref search) = query.search {
            conditions.push(format!(
                "LOWER(name) LIKE '%{}%'",
                escape(&search.to_lowercase())
            ));
        }

        // Category equality is exact and case-sensitive
        if let Some(ref category) = query.category_name {
            conditions.push(format!("category = '{}'", escape(category)));
        }

        match query.availability.as_deref() {
            Some("inLibrary") => conditions.push("quantity > 0".to_string()),
            Some("outOfLibrary") => conditions.push("quantity = 0".to_string()),
            _ => conditions.push("quantity >= 0".to_string()),
        }

        if let Some(id) = query.id {
            conditions.push(format!("id = {}", id));
        }

        let where_clause = conditions.join(" AND ");

        let select_query = format!(
            "SELECT id, name, author, category, rating, image, quantity FROM books WHERE {} ORDER BY name",
            where_clause
        );

        let books = sqlx::query_as::<_, Book>(&select_query)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok((books, total))
    }

    /// List all books of one category (exact match)
    pub async fn get_by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, name, author, category, rating, image, quantity FROM books WHERE category = $1 ORDER BY name",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Insert a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, author, category, rating, image, quantity)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, author, category, rating, image, quantity
            "#,
        )
        .bind(&book.name)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.rating)
        .bind(&book.image)
        .bind(book.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Replace the descriptive fields of a book, inserting it when the id is
    /// unknown. Quantity is owned by the borrow ledger: an existing book keeps
    /// its quantity, a fresh upsert starts at zero.
    pub async fn replace(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, name, author, category, rating, image, quantity)
            VALUES ($1, $2, $3, $4, $5, $6, 0)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                author = EXCLUDED.author,
                category = EXCLUDED.category,
                rating = EXCLUDED.rating,
                image = EXCLUDED.image
            RETURNING id, name, author, category, rating, image, quantity
            "#,
        )
        .bind(id)
        .bind(&book.name)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.rating)
        .bind(&book.image)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }
}
