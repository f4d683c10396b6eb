//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all bookshelf operations regardless of the UI driving
//! them.
//!
//! Besides dispatching, the facade owns the one piece of application state
//! the commands themselves don't carry: the create/edit form. The form is an
//! explicit [`FormState`] value here, never something read back out of a
//! rendered surface. `submit` routes to add or update based on it, and
//! deleting the book currently being edited resets it.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or terminal formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over BookStore
//!
//! `ShelfApi<S: BookStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::form::FormState;
use crate::model::{BookDraft, BookId};
use crate::query::find_by_id;
use crate::store::BookStore;
use std::path::PathBuf;

/// The main API facade for bookshelf operations.
///
/// Generic over `BookStore` to allow different storage backends. All UI
/// clients should interact through this API.
pub struct ShelfApi<S: BookStore> {
    store: S,
    data_dir: PathBuf,
    form: FormState,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            store,
            data_dir,
            form: FormState::Idle,
        }
    }

    pub fn add_book(&mut self, draft: BookDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    /// Populate-for-edit: if the book exists, the form enters `Editing(id)`
    /// and the current field values come back in `affected_books` for the UI
    /// to prefill. A missing id leaves the form untouched and returns an
    /// empty result.
    pub fn begin_edit(&mut self, id: BookId) -> Result<commands::CmdResult> {
        let books = self.store.load()?;
        let Some(book) = find_by_id(&books, id).cloned() else {
            return Ok(commands::CmdResult::default());
        };

        self.form.begin_edit(id);
        Ok(commands::CmdResult::default().with_affected_books(vec![book]))
    }

    /// Form submission: updates the book being edited and returns the form to
    /// idle, or adds a new book when nothing is being edited. Validation
    /// failures leave the form state (and the caller's draft) intact.
    pub fn submit(&mut self, draft: BookDraft) -> Result<commands::CmdResult> {
        match self.form.editing_id() {
            Some(id) => {
                let result = commands::update::run(&mut self.store, id, draft)?;
                self.form.reset();
                Ok(result)
            }
            None => commands::add::run(&mut self.store, draft),
        }
    }

    pub fn update_book(&mut self, id: BookId, draft: BookDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    /// Deletes the book; if it was mid-edit in the form, the form resets.
    pub fn delete_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        if !result.affected_books.is_empty() && self.form.is_editing(id) {
            self.form.reset();
        }
        Ok(result)
    }

    pub fn toggle_completion(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, id)
    }

    pub fn list_books(&self, filter: commands::StatusFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn search_books(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StatusFilter};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api() -> (TempDir, ShelfApi<InMemoryStore>) {
        let dir = TempDir::new().unwrap();
        let api = ShelfApi::new(InMemoryStore::new(), dir.path().to_path_buf());
        (dir, api)
    }

    #[test]
    fn submit_while_idle_adds_a_book() {
        let (_dir, mut api) = api();
        api.submit(BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap();

        let listed = api.list_books(StatusFilter::All).unwrap().listed_books;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Dune");
        assert_eq!(api.form_state(), FormState::Idle);
    }

    #[test]
    fn submit_while_editing_updates_and_returns_to_idle() {
        let (_dir, mut api) = api();
        let added = api
            .add_book(BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap()
            .affected_books
            .remove(0);

        let populated = api.begin_edit(added.id).unwrap();
        assert_eq!(populated.affected_books[0].title, "Dune");
        assert_eq!(api.form_state(), FormState::Editing(added.id));

        api.submit(BookDraft::new("Dune Messiah", "Herbert", "1969", true))
            .unwrap();
        assert_eq!(api.form_state(), FormState::Idle);

        let listed = api.list_books(StatusFilter::All).unwrap().listed_books;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Dune Messiah");
        assert_eq!(listed[0].id, added.id);
    }

    #[test]
    fn begin_edit_on_missing_id_is_a_no_op() {
        let (_dir, mut api) = api();
        let result = api.begin_edit(BookId(999)).unwrap();
        assert!(result.affected_books.is_empty());
        assert_eq!(api.form_state(), FormState::Idle);
    }

    #[test]
    fn deleting_the_book_being_edited_resets_the_form() {
        let (_dir, mut api) = api();
        let added = api
            .add_book(BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap()
            .affected_books
            .remove(0);

        api.begin_edit(added.id).unwrap();
        api.delete_book(added.id).unwrap();
        assert_eq!(api.form_state(), FormState::Idle);

        // A later submit creates instead of updating the vanished book
        api.submit(BookDraft::new("Hyperion", "Simmons", "1989", false))
            .unwrap();
        let listed = api.list_books(StatusFilter::All).unwrap().listed_books;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Hyperion");
    }

    #[test]
    fn deleting_an_unrelated_book_keeps_the_edit_session() {
        let (_dir, mut api) = api();
        let first = api
            .add_book(BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap()
            .affected_books
            .remove(0);
        let second = api
            .add_book(BookDraft::new("Hyperion", "Simmons", "1989", false))
            .unwrap()
            .affected_books
            .remove(0);

        api.begin_edit(first.id).unwrap();
        api.delete_book(second.id).unwrap();
        assert_eq!(api.form_state(), FormState::Editing(first.id));
    }

    #[test]
    fn failed_validation_keeps_the_edit_session() {
        let (_dir, mut api) = api();
        let added = api
            .add_book(BookDraft::new("Dune", "Herbert", "1965", false))
            .unwrap()
            .affected_books
            .remove(0);

        api.begin_edit(added.id).unwrap();
        let err = api.submit(BookDraft::new("Dune", "Herbert", "soon", false));
        assert!(err.is_err());
        assert_eq!(api.form_state(), FormState::Editing(added.id));
    }
}
