use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::query::find_index;
use crate::store::BookStore;

/// Removes the book with the given id by position. A missing id is a silent
/// no-op. Hard delete: there is no trash and no recovery.
pub fn run<S: BookStore>(store: &mut S, id: BookId) -> Result<CmdResult> {
    let mut books = store.load()?;
    let Some(index) = find_index(&books, id) else {
        return Ok(CmdResult::default());
    };

    let book = books.remove(index);
    store.save(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::BookDraft;
    use crate::query::find_by_id;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deleted_book_is_gone_and_length_shrinks_by_one() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, BookDraft::new("Keep", "A", "2001", false)).unwrap();
        let target = add::run(&mut store, BookDraft::new("Drop", "B", "2002", false))
            .unwrap()
            .affected_books
            .remove(0);

        let before = store.load().unwrap().len();
        run(&mut store, target.id).unwrap();

        let books = store.load().unwrap();
        assert_eq!(books.len(), before - 1);
        assert!(find_by_id(&books, target.id).is_none());
    }

    #[test]
    fn missing_id_is_a_silent_no_op() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, BookDraft::new("Keep", "A", "2001", false)).unwrap();

        let result = run(&mut store, BookId(999)).unwrap();
        assert!(result.affected_books.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
