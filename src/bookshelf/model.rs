use crate::error::{Result, ShelfError};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a book: a millisecond timestamp taken at creation time,
/// bumped past the current maximum when two additions land in the same tick.
/// Sorting ids descending therefore always yields newest-first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl BookId {
    /// The creation instant encoded in the id, when it is a valid timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(BookId)
            .map_err(|_| format!("Invalid book id: {}", s))
    }
}

/// One shelf entry. The serialized shape (including the `isComplete` field
/// name) is the on-disk contract: a plain array of these objects, nothing
/// else, no schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl Book {
    pub fn new(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            year: fields.year,
            is_complete: fields.is_complete,
        }
    }

    /// Overwrite every mutable field, keeping the id.
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.year = fields.year;
        self.is_complete = fields.is_complete;
    }
}

/// Validated form input, ready to become (or overwrite) a [`Book`].
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_complete: bool,
}

/// Raw form input as the user typed it. `year` stays a string until
/// [`BookDraft::validate`] runs, so a rejected draft can be handed back to the
/// form unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        is_complete: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            is_complete,
        }
    }

    /// Checks the draft against the record schema: non-empty title and
    /// author, integer year.
    pub fn validate(self) -> Result<BookFields> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ShelfError::Validation("Title cannot be empty".into()));
        }

        let author = self.author.trim().to_string();
        if author.is_empty() {
            return Err(ShelfError::Validation("Author cannot be empty".into()));
        }

        let year: i32 = self.year.trim().parse().map_err(|_| {
            ShelfError::Validation(format!("Year must be a number: {}", self.year))
        })?;

        Ok(BookFields {
            title,
            author,
            year,
            is_complete: self.is_complete,
        })
    }
}
