use chrono::Utc;
use tracing::debug;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookId, LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order and looks them up by linear scan.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: vec![],
        }
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.book_id == id)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.position(entity.book_id).is_some() {
            return Err(LibraryError::duplicate_id(
                format!("book with id {} already exists", entity.book_id).as_str()));
        }
        self.books.push(entity.clone());
        debug!(book_id = entity.book_id, size = self.books.len(), "stored book");
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let ndx = self.position(entity.book_id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", entity.book_id).as_str()))?;
        let existing = &mut self.books[ndx];
        *existing = BookEntity {
            version: existing.version + 1,
            updated_at: Utc::now().naive_utc(),
            ..entity.clone()
        };
        debug!(book_id = entity.book_id, version = existing.version, "updated book");
        Ok(1)
    }

    fn get(&self, id: BookId) -> LibraryResult<BookEntity> {
        self.books.iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn delete(&mut self, id: BookId) -> LibraryResult<usize> {
        let ndx = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", id).as_str()))?;
        self.books.remove(ndx);
        debug!(book_id = id, size = self.books.len(), "deleted book");
        Ok(1)
    }

    fn all(&self) -> Vec<BookEntity> {
        self.books.clone()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_keyword(&self, keyword: &str) -> Vec<BookEntity> {
        self.books.iter().filter(|b| b.matches(keyword)).cloned().collect()
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}
