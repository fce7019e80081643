use super::*;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

pub struct JsonStore {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<ContactBook, AppError> {
        if !fs::exists(&self.path)? {
            debug!("no contact file at {:?}, starting empty", self.path);
            return Ok(ContactBook::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(ContactBook::new());
        }

        let contacts: ContactBook =
            serde_json::from_str(&data).map_err(|source| AppError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        debug!("loaded {} contacts from {:?}", contacts.len(), self.path);
        Ok(contacts)
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Four-space indent, same layout the file has always had
        let mut data = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
        contacts
            .serialize(&mut serializer)
            .map_err(AppError::Serialize)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&data)?;

        debug!("saved {} contacts to {:?}", contacts.len(), self.path);
        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}
