use crate::error::Result;
use crate::model::{Book, BookId};
use crate::query::sort_by_id_descending;
use crate::store::BookStore;
use chrono::{DateTime, Utc};

/// Load the collection and put it in display order (newest first).
pub fn sorted_books<S: BookStore>(store: &S) -> Result<Vec<Book>> {
    let mut books = store.load()?;
    sort_by_id_descending(&mut books);
    Ok(books)
}

/// Assign a fresh id: the current millisecond timestamp, bumped past the
/// largest existing id so that two additions within the same tick still get
/// distinct, strictly increasing ids.
pub fn next_id(books: &[Book], now: DateTime<Utc>) -> BookId {
    let stamp = now.timestamp_millis();
    let max_existing = books.iter().map(|book| book.id.0).max().unwrap_or(0);
    BookId(stamp.max(max_existing + 1))
}
