use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::filter_by_title;
use crate::store::BookStore;

use super::helpers::sorted_books;

/// Title search: case-insensitive substring match, results in display order.
/// An empty keyword returns the whole shelf.
pub fn run<S: BookStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    let books = sorted_books(store)?;
    let listed = filter_by_title(books, keyword);
    Ok(CmdResult::default().with_listed_books(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn matches_are_case_insensitive_and_title_only() {
        let fixture = StoreFixture::new()
            .with_book("Dune", "Herbert", 1965)
            .with_book("Dune Messiah", "Herbert", 1969)
            .with_book("Hyperion", "Simmons", 1989);

        let result = run(&fixture.store, "DUNE").unwrap();
        assert_eq!(result.listed_books.len(), 2);

        // Author text never matches
        let result = run(&fixture.store, "herbert").unwrap();
        assert!(result.listed_books.is_empty());
    }

    #[test]
    fn empty_keyword_returns_the_whole_shelf() {
        let fixture = StoreFixture::new().with_books(3);
        let result = run(&fixture.store, "").unwrap();
        assert_eq!(result.listed_books.len(), 3);
    }

    #[test]
    fn no_match_yields_an_empty_listing() {
        let fixture = StoreFixture::new().with_book("Dune", "Herbert", 1965);
        let result = run(&fixture.store, "solaris").unwrap();
        assert!(result.listed_books.is_empty());
    }
}
