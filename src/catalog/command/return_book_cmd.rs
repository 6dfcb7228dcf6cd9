use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookId;

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub book_id: BookId,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(req.book_id)
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_return_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        svc.add_book(1, "Dune", "Herbert").expect("should add book");

        let res = ReturnBookCommand::new(&mut *svc).execute(ReturnBookCommandRequest::new(1));
        assert!(matches!(res, Err(CommandError::NotIssued { .. })));

        let _ = IssueBookCommand::new(&mut *svc).execute(IssueBookCommandRequest::new(1)).expect("should issue book");
        let res = ReturnBookCommand::new(&mut *svc).execute(ReturnBookCommandRequest::new(1)).expect("should return book");
        assert_eq!(1, res.book.book_id);
        assert_eq!(false, res.book.issued);
    }
}
