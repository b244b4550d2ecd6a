use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Returns the catalog in its fixed order.
///
/// Ids are curated by hand and not checked for uniqueness.
pub fn catalog() -> Vec<Book> {
    vec![
        Book::new(1, "1984", "George Orwell"),
        Book::new(2, "Brave New World", "Aldous Huxley"),
        Book::new(3, "Fahrenheit 451", "Ray Bradbury"),
    ]
}
