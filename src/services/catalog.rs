//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get(id).await.map_err(|e| not_found(e, id))
    }

    /// Validate and store a new book
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let book = self.repository.books.add(payload).await;
        tracing::info!("Catalog: created book id={}", book.id);
        Ok(book)
    }

    /// Replace every field of an existing book
    pub async fn update_book(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let book = self
            .repository
            .books
            .update(id, payload)
            .await
            .map_err(|e| not_found(e, id))?;
        tracing::info!("Catalog: updated book id={}", id);
        Ok(book)
    }

    /// Only the read flag changes; title and author are left untouched
    pub async fn set_read_status(&self, id: i64, read: bool) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .set_read_status(id, read)
            .await
            .map_err(|e| not_found(e, id))?;
        tracing::info!("Catalog: book id={} marked read={}", id, read);
        Ok(book)
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository
            .books
            .delete(id)
            .await
            .map_err(|e| not_found(e, id))?;
        tracing::info!("Catalog: deleted book id={}", id);
        Ok(())
    }

    pub async fn count_books(&self) -> usize {
        self.repository.books.len().await
    }
}

fn not_found(error: AppError, id: i64) -> AppError {
    if let AppError::NotFound(_) = error {
        tracing::debug!("Catalog: book id={} not found", id);
    }
    error
}
