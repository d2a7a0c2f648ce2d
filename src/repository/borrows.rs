//! Borrow ledger repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        borrow::{BorrowDetails, BorrowRecord},
    },
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all outstanding borrows of a user, joined with their books
    pub async fn get_by_user(&self, user_email: &str) -> AppResult<Vec<BorrowDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT br.id, br.user_email, br.borrowed_at,
                   b.id as book_id, b.name, b.author, b.category,
                   b.rating, b.image, b.quantity
            FROM borrow_records br
            JOIN books b ON b.id = br.book_id
            WHERE br.user_email = $1
            ORDER BY br.borrowed_at
            "#,
        )
        .bind(user_email)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for row in rows {
            result.push(BorrowDetails {
                id: row.get("id"),
                user_email: row.get("user_email"),
                borrowed_at: row.get("borrowed_at"),
                book: Book {
                    id: row.get("book_id"),
                    name: row.get("name"),
                    author: row.get("author"),
                    category: row.get("category"),
                    rating: row.get("rating"),
                    image: row.get("image"),
                    quantity: row.get("quantity"),
                },
            });
        }

        Ok(result)
    }

    /// Find the outstanding borrow of a book by a user, if any
    pub async fn get_by_book_and_user(
        &self,
        book_id: i32,
        user_email: &str,
    ) -> AppResult<Option<BorrowRecord>> {
        let record = sqlx::query_as::<_, BorrowRecord>(
            "SELECT id, book_id, user_email, borrowed_at FROM borrow_records WHERE book_id = $1 AND user_email = $2",
        )
        .bind(book_id)
        .bind(user_email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Record a borrow. The quantity decrement and the ledger insert commit
    /// together or not at all, and the decrement only applies while
    /// quantity > 0, so the counter can never go negative and concurrent
    /// borrows cannot oversell a book.
    pub async fn create(&self, book_id: i32, user_email: &str) -> AppResult<BorrowRecord> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE books SET quantity = quantity - 1 WHERE id = $1 AND quantity > 0")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

            return Err(if exists {
                AppError::BusinessRule("Book is not available for borrowing".to_string())
            } else {
                AppError::NotFound(format!("Book with id {} not found", book_id))
            });
        }

        // The unique index on (book_id, user_email) catches a concurrent
        // duplicate that slipped past the service-level check
        let record = sqlx::query_as::<_, BorrowRecord>(
            r#"
            INSERT INTO borrow_records (book_id, user_email)
            VALUES ($1, $2)
            RETURNING id, book_id, user_email, borrowed_at
            "#,
        )
        .bind(book_id)
        .bind(user_email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("You have already borrowed this book".to_string())
            }
            e => AppError::Database(e),
        })?;

        tx.commit().await?;

        Ok(record)
    }

    /// Delete a borrow record of the given user and give the copy back to the
    /// catalog. Delete and increment commit together or not at all.
    pub async fn delete(&self, id: i32, user_email: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let book_id: Option<i32> = sqlx::query_scalar(
            "DELETE FROM borrow_records WHERE id = $1 AND user_email = $2 RETURNING book_id",
        )
        .bind(id)
        .bind(user_email)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(book_id) = book_id else {
            return Err(AppError::NotFound(format!(
                "Borrow record with id {} not found",
                id
            )));
        };

        sqlx::query("UPDATE books SET quantity = quantity + 1 WHERE id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
