use super::*;

use super::contact::{ContactForm, display_label, name_from_label};
use super::view::{Notice, View};
use crate::store::ContactStore;
use log::info;

/// One user action, as a button press or list click would deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Update,
    Delete,
    Search(Option<String>),
    Refresh,
    Select(String),
}

/// Bridges user commands to the contact book, its store and a view.
///
/// The controller owns the session state a form window would hold: the
/// input fields, the labels currently listed and the highlighted label.
pub struct Controller<S: ContactStore, V: View> {
    contacts: ContactBook,
    storage: S,
    view: V,
    form: ContactForm,
    listing: Vec<String>,
    selected: Option<String>,
}

impl<S: ContactStore, V: View> Controller<S, V> {
    /// Loads the book from `storage`. Nothing is rendered until the first
    /// command.
    pub fn new(storage: S, view: V) -> Result<Self, AppError> {
        let contacts = storage.load()?;
        info!(
            "session started with {} contacts ({} storage)",
            contacts.len(),
            storage.medium()
        );

        Ok(Self {
            contacts,
            storage,
            view,
            form: ContactForm::default(),
            listing: Vec::new(),
            selected: None,
        })
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_form(&mut self, form: ContactForm) {
        self.form = form;
    }

    /// Labels currently shown, in display order.
    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Runs a command and reports recoverable errors through the view.
    /// Only storage failures are returned.
    pub fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        match self.execute(command) {
            Err(err) if err.is_recoverable() => {
                self.view.notify(&Notice::from(&err));
                Ok(())
            }
            outcome => outcome,
        }
    }

    /// Runs a command and returns every error to the caller.
    pub fn execute(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Add => self.add(),
            Command::Update => self.update(),
            Command::Delete => self.delete(),
            Command::Search(query) => self.search(query.as_deref()).map(|_| ()),
            Command::Refresh => {
                self.refresh();
                Ok(())
            }
            Command::Select(label) => {
                self.select(&label);
                Ok(())
            }
        }
    }

    pub fn add(&mut self) -> Result<(), AppError> {
        let form = self.form.trimmed();
        form.validate_new()?;

        self.contacts
            .add_contact(form.name.clone(), form.to_contact())?;
        self.persist()?;
        info!("added contact {}", form.name);

        self.view.notify(&Notice::info("Success", "Contact added."));
        self.refresh();
        self.form.clear();
        Ok(())
    }

    pub fn update(&mut self) -> Result<(), AppError> {
        let name = self.selected_name("update")?;
        let update = self.form.to_update();

        let contact = self.contacts.update_contact(&name, &update)?;
        let label = display_label(&name, contact);
        self.persist()?;
        info!("updated contact {name}");

        let notice = Notice::info("Success", "Contact updated.");
        self.view.notify(&notice);
        // The label changes with the phone; keep the same contact highlighted
        self.selected = Some(label);
        self.refresh();
        Ok(())
    }

    pub fn delete(&mut self) -> Result<(), AppError> {
        let name = self.selected_name("delete")?;

        self.contacts.delete_contact(&name)?;
        self.persist()?;
        info!("deleted contact {name}");

        let notice = Notice::info("Success", "Contact deleted.");
        self.view.notify(&notice);
        self.selected = None;
        self.refresh();
        Ok(())
    }

    /// Lists the contacts matching `query`. A missing or empty query does
    /// nothing, while a whitespace-only one trims to nothing and lists
    /// every contact. Returns the number of matches shown.
    pub fn search(&mut self, query: Option<&str>) -> Result<usize, AppError> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return Ok(0);
        };
        let query = query.trim().to_lowercase();

        let matches: Vec<String> = self
            .contacts
            .find(&query)
            .into_iter()
            .map(|(name, contact)| display_label(name, contact))
            .collect();

        if matches.is_empty() {
            // The current listing stays as it is
            return Err(AppError::NoMatch(query));
        }

        let found = matches.len();
        self.show(matches);
        Ok(found)
    }

    /// Lists every contact in store order.
    pub fn refresh(&mut self) {
        let labels = self.contacts.labels();
        self.show(labels);
    }

    /// Highlights `label` and fills the form from the contact it names.
    pub fn select(&mut self, label: &str) {
        if label.is_empty() {
            return;
        }

        let name = name_from_label(label);
        self.form.populate(name, self.contacts.get(name));
        self.selected = Some(label.to_string());
    }

    /// Selects the `index`-th listed label (zero based).
    pub fn select_index(&mut self, index: usize) -> Result<(), AppError> {
        let label = self
            .listing
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("list entry {}", index + 1)))?;

        self.select(&label);
        Ok(())
    }

    fn show(&mut self, labels: Vec<String>) {
        if self
            .selected
            .as_ref()
            .is_some_and(|label| !labels.contains(label))
        {
            self.selected = None;
        }

        self.view.render(&labels);
        self.listing = labels;
    }

    fn selected_name(&self, action: &str) -> Result<String, AppError> {
        let label = self
            .selected
            .as_deref()
            .ok_or_else(|| AppError::NoSelection(action.to_string()))?;

        let name = name_from_label(label);
        if !self.contacts.contains(name) {
            return Err(AppError::NotFound(name.to_string()));
        }
        Ok(name.to_string())
    }

    fn persist(&self) -> Result<(), AppError> {
        self.storage.save(&self.contacts)
    }
}
