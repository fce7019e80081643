use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path of the JSON contact file
    #[arg(long, env = "CONTACTS_FILE", default_value = crate::store::STORAGE_PATH)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Update an existing contact.
    /// Fields left out keep their current value
    Update {
        /// Name of the contact to update
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Search contacts by part of the name or phone number
    Search {
        /// Search term
        query: String,
    },
    /// List all contacts
    List,
    /// Show every field of a contact
    Show {
        /// Contact name
        #[arg(long)]
        name: String,
    },
    /// Start an interactive menu session
    Interactive,
}
