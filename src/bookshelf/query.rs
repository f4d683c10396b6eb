//! Pure lookups and ordering over an in-memory collection.
//!
//! Nothing here touches storage; every function takes the collection it was
//! given and scans it. The shelf is small by construction (hand-entered), so
//! linear scans are the whole story.

use crate::model::{Book, BookId};

/// Position of the book with the given id, if present.
pub fn find_index(books: &[Book], id: BookId) -> Option<usize> {
    books.iter().position(|book| book.id == id)
}

/// The book with the given id, if present.
pub fn find_by_id(books: &[Book], id: BookId) -> Option<&Book> {
    books.iter().find(|book| book.id == id)
}

/// Case-insensitive substring match against the title only. The empty
/// keyword matches everything; author and year are never searched.
pub fn filter_by_title(books: Vec<Book>, keyword: &str) -> Vec<Book> {
    let keyword = keyword.to_lowercase();
    books
        .into_iter()
        .filter(|book| book.title.to_lowercase().contains(&keyword))
        .collect()
}

/// In-place descending sort on id: newest first. Display order is always
/// re-derived with this, never trusted from storage.
pub fn sort_by_id_descending(books: &mut [Book]) {
    books.sort_by(|a, b| b.id.cmp(&a.id));
}
