use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { books: self.catalog_service.list_books() })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_list_books() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let res = ListBooksCommand::new(&*svc).execute(ListBooksCommandRequest::default()).expect("should list");
        assert!(res.books.is_empty());

        svc.add_book(1, "Dune", "Herbert").expect("should add book");
        svc.add_book(2, "Emma", "Austen").expect("should add book");
        let res = ListBooksCommand::new(&*svc).execute(ListBooksCommandRequest::default()).expect("should list");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Emma"], titles);
    }
}
