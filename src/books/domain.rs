use crate::core::library::BookStatus;

pub mod model;

pub trait Book {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;

    // case-insensitive substring match on title or author
    fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title().to_lowercase().contains(&keyword) || self.author().to_lowercase().contains(&keyword)
    }
}
