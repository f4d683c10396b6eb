use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookDraft};
use crate::store::BookStore;
use chrono::Utc;

use super::helpers::next_id;

/// Validates the draft, assigns a fresh id, prepends the book, and rewrites
/// the collection. No uniqueness check against existing titles.
pub fn run<S: BookStore>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    let fields = draft.validate()?;

    let mut books = store.load()?;
    let book = Book::new(next_id(&books, Utc::now()), fields);
    books.insert(0, book.clone());
    store.save(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
