pub use crate::cli::{command, run_app};
pub use crate::domain::{
    BufferView, Command, Contact, ContactBook, ContactForm, ContactUpdate, Controller, Notice,
    NoticeLevel, View,
    contact::{self, display_label, name_from_label},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStore, MemStore};
