use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::{BookId, BookStatus};
use crate::utils::date::serializer;

// BookEntity is the stored form of a catalog item; only the repository holds it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(book_id: BookId, title: &str, author: &str) -> Self {
        Self {
            book_id,
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            issued: false,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Book for BookEntity {
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


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new(1, "title", "author");
        assert_eq!(1, book.book_id);
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(0, book.version);
        assert_eq!(BookStatus::Available, book.status());
    }

    #[test]
    fn test_should_match_keyword_ignoring_case() {
        let book = BookEntity::new(1, "The Hobbit", "J.R.R. Tolkien");
        assert!(book.matches("tolkien"));
        assert!(book.matches("HOBBIT"));
        assert!(book.matches("e h"));
        assert!(!book.matches("dune"));
    }
}
