use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::query::find_index;
use crate::store::BookStore;

/// Flips the completion flag of the book with the given id, moving it between
/// the unread and finished lists. A missing id is a silent no-op.
pub fn run<S: BookStore>(store: &mut S, id: BookId) -> Result<CmdResult> {
    let mut books = store.load()?;
    let Some(index) = find_index(&books, id) else {
        return Ok(CmdResult::default());
    };

    books[index].is_complete = !books[index].is_complete;
    store.save(&books)?;

    let book = books[index].clone();
    let status = if book.is_complete {
        "finished"
    } else {
        "unread"
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book marked {} ({}): {}",
        status, book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
