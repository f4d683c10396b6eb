use super::BookStore;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookId;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let book = Book {
                id: BookId(self.next_id),
                title: title.to_string(),
                author: author.to_string(),
                year,
                is_complete: false,
            };
            self.next_id += 1;
            let mut books = self.store.load().unwrap();
            books.insert(0, book);
            self.store.save(&books).unwrap();
            self
        }

        pub fn with_finished_book(mut self, title: &str, author: &str, year: i32) -> Self {
            self = self.with_book(title, author, year);
            let mut books = self.store.load().unwrap();
            books[0].is_complete = true;
            self.store.save(&books).unwrap();
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_book(
                    &format!("Test Book {}", i + 1),
                    &format!("Author {}", i + 1),
                    2000 + i as i32,
                );
            }
            self
        }
    }
}
