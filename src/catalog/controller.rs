use std::io::{BufRead, Write};
use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::console::{parse_id, Console};
use crate::core::controller::{render_console_error, AppState, ConsoleError, Notice};
use crate::core::domain::Configuration;
use crate::core::library::{BookId, LibraryError, LibraryResult};

const BANNER: &str = "========= 📚 Library Management System =========";
const BANNER_RULE: &str = "===============================================";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const GOODBYE: &str = "👋 Exiting Library System. Goodbye!";

/// Options of the main menu, numbered as the user types them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    DisplayBooks,
    IssueBook,
    ReturnBook,
    SearchBook,
    RemoveBook,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddBook,
        MenuChoice::DisplayBooks,
        MenuChoice::IssueBook,
        MenuChoice::ReturnBook,
        MenuChoice::SearchBook,
        MenuChoice::RemoveBook,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i64) -> Option<MenuChoice> {
        match number {
            1..=7 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::DisplayBooks => "Display Books",
            MenuChoice::IssueBook => "Issue Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::SearchBook => "Search Book",
            MenuChoice::RemoveBook => "Remove Book",
            MenuChoice::Exit => "Exit",
        }
    }
}

// Flow tells the menu loop whether to keep going after a handler ran
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Flow {
    Continue,
    Exit,
}

enum Input<T> {
    Value(T),
    Invalid,
    Closed,
}

/// Runs the menu until the user picks Exit or the input ends.
///
/// Catalog errors are printed and the loop continues; only console I/O
/// failures are returned.
pub fn run_menu<R: BufRead, W: Write>(state: &AppState, catalog: &mut dyn CatalogService,
                                      console: &mut Console<R, W>) -> LibraryResult<()> {
    info!(branch_id = %state.config.branch_id, "starting catalog menu");
    loop {
        print_menu(console)?;
        let choice = match read_choice(console)? {
            Some(choice) => choice,
            None => break,
        };
        debug!(choice, "menu choice");
        let flow = match MenuChoice::from_number(choice) {
            Some(MenuChoice::AddBook) => add_book(catalog, console)?,
            Some(MenuChoice::DisplayBooks) => display_books(state, catalog, console)?,
            Some(MenuChoice::IssueBook) => issue_book(catalog, console)?,
            Some(MenuChoice::ReturnBook) => return_book(catalog, console)?,
            Some(MenuChoice::SearchBook) => search_books(state, catalog, console)?,
            Some(MenuChoice::RemoveBook) => remove_book(catalog, console)?,
            Some(MenuChoice::Exit) => Flow::Exit,
            None => {
                report(console, &(Notice::Warning, "Invalid choice! Please try again.".to_string()))?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            break;
        }
    }
    console.write_line(GOODBYE)?;
    info!(books = catalog.count(), "leaving catalog menu");
    Ok(())
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> LibraryResult<()> {
    console.write_line("")?;
    console.write_line(BANNER)?;
    for (ndx, choice) in MenuChoice::ALL.iter().enumerate() {
        console.write_line(format!("{}. {}", ndx + 1, choice.label()).as_str())?;
    }
    console.write_line(BANNER_RULE)
}

// reprompts until a number is typed, None once input is exhausted
fn read_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> LibraryResult<Option<i64>> {
    loop {
        let line = match console.prompt(CHOICE_PROMPT)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match parse_id(&line) {
            Ok(choice) => return Ok(Some(choice)),
            Err(_) => console.write_line("❌ Please enter a valid number!")?,
        }
    }
}

fn read_id<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> LibraryResult<Input<BookId>> {
    match console.prompt_id(label) {
        Ok(Some(id)) => Ok(Input::Value(id)),
        Ok(None) => Ok(Input::Closed),
        Err(err @ LibraryError::InvalidInput { .. }) => {
            debug!(error = %err, "rejected id");
            report(console, &CommandError::from(err).into())?;
            Ok(Input::Invalid)
        }
        Err(err) => Err(err),
    }
}

fn read_text<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> LibraryResult<Input<String>> {
    Ok(console.prompt(label)?.map_or(Input::Closed, Input::Value))
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &ConsoleError) -> LibraryResult<()> {
    console.write_line(render_console_error(err).as_str())
}

fn section<R: BufRead, W: Write>(console: &mut Console<R, W>, title: &str) -> LibraryResult<()> {
    console.write_line("")?;
    console.write_line(format!("--- {} ---", title).as_str())
}

pub fn add_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService, console: &mut Console<R, W>) -> LibraryResult<Flow> {
    section(console, "Add New Book")?;
    let book_id = match read_id(console, "Enter Book ID: ")? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };
    // a taken id is rejected before asking for the rest of the record
    if catalog.find_book_by_id(book_id).is_ok() {
        let err = CommandError::DuplicateKey { message: format!("book {} already exists", book_id) };
        report(console, &err.into())?;
        return Ok(Flow::Continue);
    }
    let title = match read_text(console, "Enter Book Title: ")? {
        Input::Value(title) => title,
        _ => return Ok(Flow::Exit),
    };
    let author = match read_text(console, "Enter Author Name: ")? {
        Input::Value(author) => author,
        _ => return Ok(Flow::Exit),
    };
    match AddBookCommand::new(catalog).execute(AddBookCommandRequest::new(book_id, title.as_str(), author.as_str())) {
        Ok(_) => console.write_line("✅ Book Added Successfully!")?,
        Err(err) => report(console, &err.into())?,
    }
    Ok(Flow::Continue)
}

pub fn display_books<R: BufRead, W: Write>(state: &AppState, catalog: &dyn CatalogService,
                                           console: &mut Console<R, W>) -> LibraryResult<Flow> {
    section(console, "Library Books")?;
    match ListBooksCommand::new(catalog).execute(ListBooksCommandRequest::default()) {
        Ok(res) if res.books.is_empty() => console.write_line("No books available in the library!")?,
        Ok(res) => print_table(&state.config, &res.books, console)?,
        Err(err) => report(console, &err.into())?,
    }
    Ok(Flow::Continue)
}

pub fn issue_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService, console: &mut Console<R, W>) -> LibraryResult<Flow> {
    section(console, "Issue Book")?;
    let book_id = match read_id(console, "Enter Book ID to issue: ")? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };
    match IssueBookCommand::new(catalog).execute(IssueBookCommandRequest::new(book_id)) {
        Ok(_) => console.write_line("📘 Book Issued Successfully!")?,
        Err(err) => report(console, &err.into())?,
    }
    Ok(Flow::Continue)
}

pub fn return_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService, console: &mut Console<R, W>) -> LibraryResult<Flow> {
    section(console, "Return Book")?;
    let book_id = match read_id(console, "Enter Book ID to return: ")? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };
    match ReturnBookCommand::new(catalog).execute(ReturnBookCommandRequest::new(book_id)) {
        Ok(_) => console.write_line("📗 Book Returned Successfully!")?,
        Err(err) => report(console, &err.into())?,
    }
    Ok(Flow::Continue)
}

pub fn search_books<R: BufRead, W: Write>(state: &AppState, catalog: &dyn CatalogService,
                                          console: &mut Console<R, W>) -> LibraryResult<Flow> {
    section(console, "Search Book")?;
    let keyword = match read_text(console, "Enter keyword (Title or Author): ")? {
        Input::Value(keyword) => keyword,
        _ => return Ok(Flow::Exit),
    };
    match SearchBooksCommand::new(catalog).execute(SearchBooksCommandRequest::new(keyword.as_str())) {
        Ok(res) if res.books.is_empty() => {
            report(console, &(Notice::Failure, "No matching books found!".to_string()))?
        }
        Ok(res) => print_table(&state.config, &res.books, console)?,
        Err(err) => report(console, &err.into())?,
    }
    Ok(Flow::Continue)
}

pub fn remove_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService, console: &mut Console<R, W>) -> LibraryResult<Flow> {
    section(console, "Remove Book")?;
    let book_id = match read_id(console, "Enter Book ID to remove: ")? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };
    match RemoveBookCommand::new(catalog).execute(RemoveBookCommandRequest::new(book_id)) {
        Ok(_) => console.write_line("🗑️ Book Removed Successfully!")?,
        Err(err) => report(console, &err.into())?,
    }
    Ok(Flow::Continue)
}

pub fn table_header(config: &Configuration) -> String {
    format!("{:<5} {:<tw$} {:<aw$} {:<10}", "ID", "Title", "Author", "Status",
            tw = config.title_width, aw = config.author_width)
}

pub fn table_row(config: &Configuration, book: &BookDto) -> String {
    format!("{:<5} {:<tw$} {:<aw$} {:<10}", book.book_id, book.title, book.author, book.status().to_string(),
            tw = config.title_width, aw = config.author_width)
}

fn print_table<R: BufRead, W: Write>(config: &Configuration, books: &[BookDto],
                                     console: &mut Console<R, W>) -> LibraryResult<()> {
    console.write_line(table_header(config).as_str())?;
    console.write_line("-".repeat(60).as_str())?;
    for book in books {
        console.write_line(table_row(config, book).as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::books::dto::BookDto;
    use crate::catalog::controller::{add_book, issue_book, remove_book, run_menu, table_header, table_row, Flow, MenuChoice};
    use crate::catalog::factory;
    use crate::core::console::Console;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn run_script(script: &str) -> String {
        let state = AppState::new("test", RepositoryStore::Memory);
        let mut catalog = factory::create_catalog_service(&state.config, state.store);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run_menu(&state, &mut *catalog, &mut console).expect("menu should finish");
        String::from_utf8(console.into_writer()).expect("utf8 output")
    }

    #[test]
    fn test_should_map_menu_numbers() {
        assert_eq!(Some(MenuChoice::AddBook), MenuChoice::from_number(1));
        assert_eq!(Some(MenuChoice::SearchBook), MenuChoice::from_number(5));
        assert_eq!(Some(MenuChoice::Exit), MenuChoice::from_number(7));
        assert_eq!(None, MenuChoice::from_number(0));
        assert_eq!(None, MenuChoice::from_number(8));
        assert_eq!(None, MenuChoice::from_number(-1));
    }

    #[test]
    fn test_should_render_table_columns() {
        let config = Configuration::new("test");
        assert_eq!("ID    Title                Author               Status    ", table_header(&config));
        let book = BookDto::new(1, "Dune", "Herbert");
        assert_eq!("1     Dune                 Herbert              Available ", table_row(&config, &book));
    }

    #[test]
    fn test_should_exit_on_seven() {
        let out = run_script("7\n2\n");
        assert!(out.contains("1. Add Book"));
        assert!(out.contains("7. Exit"));
        assert!(out.ends_with("👋 Exiting Library System. Goodbye!\n"));
        assert!(!out.contains("--- Library Books ---"));
    }

    #[test]
    fn test_should_exit_on_end_of_input() {
        let out = run_script("");
        assert!(out.ends_with("👋 Exiting Library System. Goodbye!\n"));
    }

    #[test]
    fn test_should_reprompt_on_non_numeric_choice() {
        let out = run_script("abc\n7\n");
        assert_eq!(1, out.matches("❌ Please enter a valid number!").count());
        assert_eq!(1, out.matches("========= 📚 Library Management System =========").count());
    }

    #[test]
    fn test_should_warn_on_unknown_choice() {
        let out = run_script("9\n7\n");
        assert!(out.contains("⚠️ Invalid choice! Please try again."));
        assert_eq!(2, out.matches("1. Add Book").count());
    }

    #[test]
    fn test_should_reject_duplicate_before_title() {
        let mut catalog = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        catalog.add_book(1, "Dune", "Herbert").expect("should add book");
        let mut console = Console::new(Cursor::new("1\n"), Vec::new());

        let flow = add_book(&mut *catalog, &mut console).expect("should run");
        assert_eq!(Flow::Continue, flow);
        let out = String::from_utf8(console.into_writer()).expect("utf8 output");
        assert!(out.contains("⚠️ Book ID already exists! Try again."));
        assert!(!out.contains("Enter Book Title: "));
    }

    #[test]
    fn test_should_report_non_numeric_id() {
        let mut catalog = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let mut console = Console::new(Cursor::new("one\n"), Vec::new());

        let flow = issue_book(&mut *catalog, &mut console).expect("should run");
        assert_eq!(Flow::Continue, flow);
        let out = String::from_utf8(console.into_writer()).expect("utf8 output");
        assert!(out.contains("❌ Invalid input! Please enter numeric ID."));
    }

    #[test]
    fn test_should_stop_when_input_ends_mid_operation() {
        let mut catalog = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let mut console = Console::new(Cursor::new("4\nDune\n"), Vec::new());

        let flow = add_book(&mut *catalog, &mut console).expect("should run");
        assert_eq!(Flow::Exit, flow);
        assert_eq!(0, catalog.count());

        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(Flow::Exit, remove_book(&mut *catalog, &mut console).expect("should run"));
    }
}
