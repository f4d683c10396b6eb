use crate::commands::{CmdResult, StatusFilter};
use crate::error::Result;
use crate::store::BookStore;

use super::helpers::sorted_books;

pub fn run<S: BookStore>(store: &S, filter: StatusFilter) -> Result<CmdResult> {
    let books = sorted_books(store)?;
    let listed: Vec<_> = match filter {
        StatusFilter::All => books,
        StatusFilter::Unread => books.into_iter().filter(|b| !b.is_complete).collect(),
        StatusFilter::Complete => books.into_iter().filter(|b| b.is_complete).collect(),
    };

    Ok(CmdResult::default().with_listed_books(listed))
}
