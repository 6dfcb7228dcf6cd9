use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookId;

pub struct IssueBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> IssueBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueBookCommandRequest {
    pub book_id: BookId,
}

impl IssueBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'_> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.catalog_service.issue_book(req.book_id)
            .map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_issue_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        svc.add_book(1, "Dune", "Herbert").expect("should add book");

        let res = IssueBookCommand::new(&mut *svc).execute(IssueBookCommandRequest::new(1)).expect("should issue book");
        assert!(res.book.issued);

        let res = IssueBookCommand::new(&mut *svc).execute(IssueBookCommandRequest::new(1));
        assert!(matches!(res, Err(CommandError::AlreadyIssued { .. })));

        let res = IssueBookCommand::new(&mut *svc).execute(IssueBookCommandRequest::new(2));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
