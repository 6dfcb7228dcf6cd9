pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{BookId, LibraryResult};

/// The catalog of books: the single owner of every book record.
///
/// Every lookup is by id or keyword; callers only ever receive copies.
pub trait CatalogService {
    /// Appends a new, available book. Fails with `DuplicateId` if the id is taken.
    fn add_book(&mut self, id: BookId, title: &str, author: &str) -> LibraryResult<BookDto>;
    /// All books in insertion order.
    fn list_books(&self) -> Vec<BookDto>;
    /// Marks an available book as issued. `NotFound` or `AlreadyIssued` otherwise.
    fn issue_book(&mut self, id: BookId) -> LibraryResult<BookDto>;
    /// Marks an issued book as available again. `NotFound` or `NotIssued` otherwise.
    fn return_book(&mut self, id: BookId) -> LibraryResult<BookDto>;
    /// Books whose title or author contains `keyword`, ignoring case, in insertion order.
    fn search_books(&self, keyword: &str) -> Vec<BookDto>;
    /// Deletes the book; its id may be added again afterwards.
    fn remove_book(&mut self, id: BookId) -> LibraryResult<()>;
    fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto>;
    fn count(&self) -> usize;
}
