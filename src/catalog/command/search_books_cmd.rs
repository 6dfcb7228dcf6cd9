use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub keyword: String,
}

impl SearchBooksCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        Ok(SearchBooksCommandResponse { books: self.catalog_service.search_books(req.keyword.as_str()) })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_search_books() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        svc.add_book(1, "The Silmarillion", "Tolkien").expect("should add book");
        svc.add_book(2, "Dune", "Herbert").expect("should add book");

        let res = SearchBooksCommand::new(&*svc)
            .execute(SearchBooksCommandRequest::new("tolkien")).expect("should search");
        assert_eq!(1, res.books.len());
        assert_eq!(1, res.books[0].book_id);

        let res = SearchBooksCommand::new(&*svc)
            .execute(SearchBooksCommandRequest::new("pratchett")).expect("should search");
        assert!(res.books.is_empty());
    }
}
