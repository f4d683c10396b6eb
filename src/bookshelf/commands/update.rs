use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookDraft, BookId};
use crate::query::find_index;
use crate::store::BookStore;

/// Overwrites every mutable field of the book with the given id. A missing
/// id is a silent no-op: the collection is left untouched and no message is
/// emitted.
pub fn run<S: BookStore>(store: &mut S, id: BookId, draft: BookDraft) -> Result<CmdResult> {
    let fields = draft.validate()?;

    let mut books = store.load()?;
    let Some(index) = find_index(&books, id) else {
        return Ok(CmdResult::default());
    };

    books[index].apply(fields);
    store.save(&books)?;

    let book = books[index].clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::query::find_by_id;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn overwrites_all_mutable_fields() {
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap()
            .affected_books
            .remove(0);

        run(
            &mut store,
            added.id,
            BookDraft::new("Dune Messiah", "Frank Herbert", "1969", true),
        )
        .unwrap();

        let books = store.load().unwrap();
        let book = find_by_id(&books, added.id).unwrap();
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, 1969);
        assert!(book.is_complete);
        assert_eq!(book.id, added.id);
    }

    #[test]
    fn missing_id_is_a_silent_no_op() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, BookDraft::new("Dune", "Herbert", "1965", false)).unwrap();
        let before = store.load().unwrap();

        let result = run(
            &mut store,
            BookId(999),
            BookDraft::new("Other", "Other", "2000", false),
        )
        .unwrap();

        assert!(result.affected_books.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn invalid_draft_leaves_the_collection_untouched() {
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap()
            .affected_books
            .remove(0);

        let err = run(
            &mut store,
            added.id,
            BookDraft::new("", "Herbert", "1965", false),
        );
        assert!(err.is_err());

        let books = store.load().unwrap();
        assert_eq!(find_by_id(&books, added.id).unwrap().title, "Dune");
    }
}
