use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookId, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // called once the mutation is stored; a failed publish is only logged
    fn publish(&mut self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event) {
            warn!(event_id = %event.event_id, key = %event.key, error = %err, "failed to publish domain event");
        }
    }

    fn set_issued(&mut self, id: BookId, issued: bool) -> LibraryResult<BookDto> {
        let mut existing = self.book_repository.get(id)?;
        if existing.issued == issued {
            let message = format!("book {} issued flag is already {}", id, issued);
            warn!(book_id = id, issued, "rejected issue state change");
            return Err(if issued {
                LibraryError::already_issued(message.as_str())
            } else {
                LibraryError::not_issued(message.as_str())
            });
        }
        existing.issued = issued;
        let next = BookDto { version: existing.version + 1, ..BookDto::from(&existing) };
        let event = DomainEvent::updated("books", "books", id.to_string().as_str(), &self.metadata(), &next)?;
        self.book_repository.update(&existing)?;
        self.publish(&event);
        Ok(BookDto::from(&self.book_repository.get(id)?))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, id: BookId, title: &str, author: &str) -> LibraryResult<BookDto> {
        let entity = BookEntity::new(id, title, author);
        let book = BookDto::from(&entity);
        let event = DomainEvent::added("books", "books", id.to_string().as_str(), &self.metadata(), &book)?;
        self.book_repository.create(&entity)?;
        self.publish(&event);
        info!(book_id = id, title, author, "added book");
        Ok(book)
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.book_repository.all().iter().map(BookDto::from).collect()
    }

    fn issue_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let book = self.set_issued(id, true)?;
        info!(book_id = id, "issued book");
        Ok(book)
    }

    fn return_book(&mut self, id: BookId) -> LibraryResult<BookDto> {
        let book = self.set_issued(id, false)?;
        info!(book_id = id, "returned book");
        Ok(book)
    }

    fn search_books(&self, keyword: &str) -> Vec<BookDto> {
        self.book_repository.find_by_keyword(keyword).iter().map(BookDto::from).collect()
    }

    fn remove_book(&mut self, id: BookId) -> LibraryResult<()> {
        let existing = self.book_repository.get(id)?;
        let event = DomainEvent::deleted("books", "books", id.to_string().as_str(), &self.metadata(), &BookDto::from(&existing))?;
        self.book_repository.delete(id)?;
        self.publish(&event);
        info!(book_id = id, "removed book");
        Ok(())
    }

    fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto> {
        self.book_repository.get(id).map(|b| BookDto::from(&b))
    }

    fn count(&self) -> usize {
        self.book_repository.count()
    }
}
