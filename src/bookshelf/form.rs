//! The create/edit form state machine.
//!
//! The form has exactly two states: creating a new book, or editing an
//! existing one. The state is held here as an explicit tagged value owned by
//! the API layer, never inferred from anything rendered. Submission routes to
//! add or update depending on the state; deleting the book currently being
//! edited forces the form back to Idle.

use crate::model::BookId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Editing(BookId),
}

impl FormState {
    pub fn begin_edit(&mut self, id: BookId) {
        *self = FormState::Editing(id);
    }

    pub fn reset(&mut self) {
        *self = FormState::Idle;
    }

    pub fn is_editing(&self, id: BookId) -> bool {
        matches!(self, FormState::Editing(current) if *current == id)
    }

    pub fn editing_id(&self) -> Option<BookId> {
        match self {
            FormState::Idle => None,
            FormState::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(FormState::default(), FormState::Idle);
        assert_eq!(FormState::default().editing_id(), None);
    }

    #[test]
    fn begin_edit_then_reset_round_trips() {
        let mut form = FormState::default();
        form.begin_edit(BookId(42));
        assert!(form.is_editing(BookId(42)));
        assert!(!form.is_editing(BookId(7)));

        form.reset();
        assert_eq!(form, FormState::Idle);
    }
}
