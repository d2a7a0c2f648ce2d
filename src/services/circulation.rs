//! Borrow/return orchestration between the ledger and the catalog

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowDetails, BorrowRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get the outstanding borrows of a user
    pub async fn get_user_borrows(&self, user_email: &str) -> AppResult<Vec<BorrowDetails>> {
        self.repository.borrows.get_by_user(user_email).await
    }

    /// Borrow a book: one ledger entry per (book, borrower), one copy off the
    /// shelf. The duplicate check holds no lock; the ledger's unique index
    /// backs it under concurrency.
    pub async fn borrow(&self, book_id: i32, user_email: &str) -> AppResult<BorrowRecord> {
        if self
            .repository
            .borrows
            .get_by_book_and_user(book_id, user_email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You have already borrowed this book".to_string(),
            ));
        }

        let record = self.repository.borrows.create(book_id, user_email).await?;
        tracing::info!(
            "Borrow created: id={} book_id={} user={}",
            record.id,
            record.book_id,
            record.user_email
        );
        Ok(record)
    }

    /// Return a borrowed book by the ledger entry's own id
    pub async fn return_borrow(&self, id: i32, user_email: &str) -> AppResult<()> {
        self.repository.borrows.delete(id, user_email).await?;
        tracing::info!("Borrow returned: id={} user={}", id, user_email);
        Ok(())
    }
}
