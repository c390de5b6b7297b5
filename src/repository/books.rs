//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
};

/// Books in insertion order plus the id counter
#[derive(Debug)]
struct BookCollection {
    books: Vec<Book>,
    next_id: i64,
}

impl BookCollection {
    fn position(&self, id: i64) -> AppResult<usize> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| not_found(id))
    }
}

/// Book store guarded by a single reader/writer lock.
///
/// Every method hands back clones; nothing outside this type ever holds a
/// reference into the collection.
#[derive(Clone)]
pub struct BooksRepository {
    inner: Arc<RwLock<BookCollection>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BookCollection {
                books: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// All books, in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.inner.read().await.books.clone()
    }

    /// Get book by ID
    pub async fn get(&self, id: i64) -> AppResult<Book> {
        let collection = self.inner.read().await;
        let index = collection.position(id)?;
        Ok(collection.books[index].clone())
    }

    /// Append a new book under the next unused id
    pub async fn add(&self, payload: BookPayload) -> Book {
        let mut collection = self.inner.write().await;
        let book = Book::from_payload(collection.next_id, payload);
        collection.next_id += 1;
        collection.books.push(book.clone());
        book
    }

    /// Replace title, author and read flag, keeping the id
    pub async fn update(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        let mut collection = self.inner.write().await;
        let index = collection.position(id)?;
        collection.books[index] = Book::from_payload(id, payload);
        Ok(collection.books[index].clone())
    }

    pub async fn set_read_status(&self, id: i64, read: bool) -> AppResult<Book> {
        let mut collection = self.inner.write().await;
        let index = collection.position(id)?;
        collection.books[index].read = read;
        Ok(collection.books[index].clone())
    }

    /// Remove a book permanently
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut collection = self.inner.write().await;
        let index = collection.position(id)?;
        collection.books.remove(index);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.books.len()
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
