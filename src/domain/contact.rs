use super::*;
use serde::{Deserialize, Serialize};

/// Separator between name and phone in a display label.
pub const LABEL_SEPARATOR: &str = " - ";

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,

    #[serde(default)] // Older files may omit the optional fields.
    pub email: String,

    #[serde(default)]
    pub address: String,
}

/// Messages shown when a new contact fails validation.
pub struct ValidationReq;

impl ValidationReq {
    pub fn required_fields() -> String {
        "Name and Phone are required.".to_string()
    }

    pub fn name_separator() -> String {
        format!("Name must not contain \"{}\".", LABEL_SEPARATOR)
    }
}

impl Contact {
    pub fn new(phone: String, email: String, address: String) -> Self {
        Contact {
            phone,
            email,
            address,
        }
    }

    /// Overwrites each field the update carries a value for.
    pub fn apply(&mut self, update: &ContactUpdate) {
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(address) = &update.address {
            self.address = address.clone();
        }
    }
}

/// Partial record for an update. `None` leaves the stored field untouched.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactUpdate {
    /// Blank inputs (after trimming) become `None`.
    pub fn from_fields(phone: &str, email: &str, address: &str) -> Self {
        fn non_empty(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        ContactUpdate {
            phone: non_empty(phone),
            email: non_empty(email),
            address: non_empty(address),
        }
    }
}

/// The four input fields of the contact form.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactForm {
    pub fn new(name: &str, phone: &str, email: &str, address: &str) -> Self {
        ContactForm {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }
    }

    pub fn trimmed(&self) -> Self {
        ContactForm::new(
            self.name.trim(),
            self.phone.trim(),
            self.email.trim(),
            self.address.trim(),
        )
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    /// Fills the form from a stored record. A missing record leaves every
    /// field but the name empty.
    pub fn populate(&mut self, name: &str, contact: Option<&Contact>) {
        let blank = Contact::default();
        let contact = contact.unwrap_or(&blank);

        *self = ContactForm::new(name, &contact.phone, &contact.email, &contact.address);
    }

    /// Checks the rules a new contact must meet. Expects a trimmed form.
    pub fn validate_new(&self) -> Result<(), AppError> {
        if self.name.is_empty() || self.phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        }

        // Labels are parsed back into names, so the separator can't be part of one
        if self.name.contains(LABEL_SEPARATOR) {
            return Err(AppError::Validation(ValidationReq::name_separator()));
        }
        Ok(())
    }

    pub fn to_contact(&self) -> Contact {
        Contact::new(self.phone.clone(), self.email.clone(), self.address.clone())
    }

    pub fn to_update(&self) -> ContactUpdate {
        ContactUpdate::from_fields(&self.phone, &self.email, &self.address)
    }
}

pub fn display_label(name: &str, contact: &Contact) -> String {
    format!("{}{}{}", name, LABEL_SEPARATOR, contact.phone)
}

/// Name part of a display label: the text before the first separator,
/// or the whole label when it has none.
pub fn name_from_label(label: &str) -> &str {
    label
        .split_once(LABEL_SEPARATOR)
        .map_or(label, |(name, _)| name)
}
