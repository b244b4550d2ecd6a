use crate::model::{Book, catalog};
use anyhow::Result;
use colored::Colorize;

pub fn handle_list(json: bool) -> Result<()> {
    let books = catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        print_book_list(&books);
    }
    Ok(())
}

fn print_book_list(books: &[Book]) {
    for book in books {
        println!(
            "{} {} by {}",
            book.id.to_string().cyan(),
            book.title.bold(),
            book.author
        );
    }
}
