//! Book-stall inventory: the one exercise with state across calls.
//!
//! Entries keep insertion order and are looked up by title with a linear
//! scan, first match wins. Rejected operations leave the stall untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InventoryError;

/// A title on the stall and its copies on hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub copies: u32,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} - Copies Available: {}",
            self.title, self.author, self.copies
        )
    }
}

/// One step of a scripted stall session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Create {
        title: String,
        author: String,
        copies: u32,
    },
    Add {
        title: String,
        copies: u32,
    },
    Sell {
        title: String,
        copies: u32,
    },
}

/// Final listing and rejection messages of a replayed session.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replay {
    pub details: Vec<String>,
    pub rejections: Vec<String>,
}

/// Run `operations` in order on an empty stall.
///
/// Rejections do not stop the replay; each one is recorded and the stall is
/// left as it was before that step.
pub fn replay(operations: &[Operation]) -> Replay {
    let mut stall = BookStall::new();
    let rejections = operations
        .iter()
        .filter_map(|operation| stall.apply(operation).err())
        .map(|err| err.to_string())
        .collect();
    Replay {
        details: stall.details(),
        rejections,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookStall {
    books: Vec<Book>,
}

impl BookStall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Titles are not deduplicated; lookups hit the first.
    pub fn create_book(&mut self, title: &str, author: &str, copies: u32) {
        debug!(title, author, copies, "book created");
        self.books.push(Book {
            title: title.to_string(),
            author: author.to_string(),
            copies,
        });
    }

    /// Add copies to a title, returning the new count.
    pub fn add_copies(&mut self, title: &str, copies: u32) -> Result<u32, InventoryError> {
        let book = self.find_mut(title)?;
        let Some(total) = book.copies.checked_add(copies) else {
            let err = InventoryError::Overflow(title.to_string());
            warn!(%err, "add copies rejected");
            return Err(err);
        };
        book.copies = total;
        debug!(title, added = copies, total, "copies added");
        Ok(total)
    }

    /// Sell copies of a title, returning the remaining count.
    ///
    /// Selling more than are on hand is rejected and changes nothing.
    pub fn sell_book(&mut self, title: &str, copies: u32) -> Result<u32, InventoryError> {
        let book = self.find_mut(title)?;
        if book.copies < copies {
            let err = InventoryError::NotEnoughCopies {
                title: title.to_string(),
                available: book.copies,
                requested: copies,
            };
            warn!(%err, "sale rejected");
            return Err(err);
        }
        book.copies -= copies;
        debug!(title, sold = copies, remaining = book.copies, "copies sold");
        Ok(book.copies)
    }

    pub fn apply(&mut self, operation: &Operation) -> Result<(), InventoryError> {
        match operation {
            Operation::Create {
                title,
                author,
                copies,
            } => self.create_book(title, author, *copies),
            Operation::Add { title, copies } => {
                self.add_copies(title, *copies)?;
            }
            Operation::Sell { title, copies } => {
                self.sell_book(title, *copies)?;
            }
        }
        Ok(())
    }

    /// One line per entry, in insertion order.
    pub fn details(&self) -> Vec<String> {
        self.books.iter().map(Book::to_string).collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// First entry with the given title.
    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    fn find_mut(&mut self, title: &str) -> Result<&mut Book, InventoryError> {
        match self.books.iter_mut().find(|book| book.title == title) {
            Some(book) => Ok(book),
            None => {
                let err = InventoryError::BookNotFound(title.to_string());
                warn!(%err, "lookup rejected");
                Err(err)
            }
        }
    }
}
