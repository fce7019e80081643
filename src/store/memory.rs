use super::*;
use std::cell::{Cell, RefCell};

/// Keeps the last saved book in memory. Nothing touches the disk.
#[derive(Default)]
pub struct MemStore {
    data: RefCell<ContactBook>,
    saves: Cell<usize>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: ContactBook) -> Self {
        Self {
            data: RefCell::new(contacts),
            saves: Cell::new(0),
        }
    }

    /// Copy of what was last saved.
    pub fn snapshot(&self) -> ContactBook {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<ContactBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
