use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "books.json";

/// File-backed store: the whole collection in one JSON array under the data
/// directory.
pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        // Fail-open: a slot we cannot parse is treated as an empty shelf.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        fs::write(self.data_path(), content).map_err(ShelfError::Io)?;
        Ok(())
    }
}
