pub mod book;
pub mod contact;
pub mod controller;
pub mod view;

use crate::errors::AppError;

pub use book::ContactBook;
pub use contact::{Contact, ContactForm, ContactUpdate};
pub use controller::{Command, Controller};
pub use view::{BufferView, Notice, NoticeLevel, View};
