pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    fn find_by_keyword(&self, keyword: &str) -> Vec<BookEntity>;
    fn count(&self) -> usize;
}
