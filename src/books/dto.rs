use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::{BookId, BookStatus};
use crate::utils::date::serializer;

// BookDto is the copy of a catalog item handed to callers of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: BookId,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub issued: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(book_id: BookId, title: &str, author: &str) -> BookDto {
        BookDto::from(&BookEntity::new(book_id, title, author))
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_issued(self.issued)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            issued: other.issued,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            issued: other.issued,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
