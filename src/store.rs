pub mod json;
pub mod memory;

use crate::domain::ContactBook;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use json::JsonStore;
pub use memory::MemStore;

/// Default location of the contact file, relative to the working directory.
pub const STORAGE_PATH: &str = "contacts.json";

/// Persistence backend. Every save writes the whole book.
pub trait ContactStore {
    fn load(&self) -> Result<ContactBook, AppError>;

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
