pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::{ContactForm, Notice, NoticeLevel, View};
use crate::errors::AppError;
use std::io::{self, BufRead, Write};

/// Prints listings and info notices to stdout, warnings to stderr.
pub struct TerminalView;

impl View for TerminalView {
    fn render(&mut self, labels: &[String]) {
        if labels.is_empty() {
            println!("No contact yet");
            return;
        }

        for label in labels {
            println!("{label}");
        }
    }

    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => eprintln!("{}: {}", notice.title, notice.message),
        }
    }
}

// OUTPUT FUNCTIONS
pub fn show_menu() -> Result<(), AppError> {
    println!("\n");
    println!("1. Add Contact");
    println!("2. Update Contact");
    println!("3. Delete Contact");
    println!("4. Search Contact");
    println!("5. View Contacts");
    println!("6. Select Contact");
    println!("7. Exit");
    prompt("")
}

pub fn prompt(message: &str) -> Result<(), AppError> {
    if !message.is_empty() {
        println!("{message}");
    }
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn display_form(form: &ContactForm) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        form.name, form.phone, form.email, form.address
    )
}

// INPUT FUNCTIONS
/// Reads one trimmed line. `None` once the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn get_input_to_lower<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    Ok(get_input(input)?.map(|line| line.to_lowercase()))
}
