use crate::{
    cli::{self, TerminalView, display_form, get_input, get_input_to_lower, prompt},
    prelude::{
        AppError, Command, ContactForm, ContactStore, Controller, JsonStore, Notice, View,
        command::{Cli, Commands},
    },
};
use clap::Parser;
use log::info;
use std::io::{self, BufRead};

/// Entries of the interactive menu.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Search,
    View,
    Select,
    Exit,
}

pub fn parse_menu_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::Update),
        "3" => Ok(MenuChoice::Delete),
        "4" => Ok(MenuChoice::Search),
        "5" => Ok(MenuChoice::View),
        "6" => Ok(MenuChoice::Select),
        "7" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    info!("using contact file {:?}", cli.file);
    let storage = JsonStore::new(&cli.file);
    let mut controller = Controller::new(storage, TerminalView)?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            controller.set_form(ContactForm::new(
                &name,
                &phone,
                email.as_deref().unwrap_or_default(),
                address.as_deref().unwrap_or_default(),
            ));
            controller.execute(Command::Add)
        }

        // Select the contact by name, then update it with the given fields
        Commands::Update {
            name,
            phone,
            email,
            address,
        } => {
            let name = name.trim();
            controller.execute(Command::Select(name.to_string()))?;
            controller.set_form(ContactForm::new(
                name,
                phone.as_deref().unwrap_or_default(),
                email.as_deref().unwrap_or_default(),
                address.as_deref().unwrap_or_default(),
            ));
            controller.execute(Command::Update)
        }

        Commands::Delete { name } => {
            controller.execute(Command::Select(name.trim().to_string()))?;
            controller.execute(Command::Delete)
        }

        Commands::Search { query } => controller.execute(Command::Search(Some(query))),

        Commands::List => controller.execute(Command::Refresh),

        Commands::Show { name } => {
            let name = name.trim().to_string();
            if !controller.contacts().contains(&name) {
                return Err(AppError::NotFound(name));
            }
            controller.execute(Command::Select(name))?;
            println!("{}", display_form(controller.form()));
            Ok(())
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            run_interactive(&mut controller, &mut stdin.lock())
        }
    }
}

/// Menu session over `input`. Ends on Exit or when the input runs out.
pub fn run_interactive<S, V, R>(
    controller: &mut Controller<S, V>,
    input: &mut R,
) -> Result<(), AppError>
where
    S: ContactStore,
    V: View,
    R: BufRead,
{
    println!("\n\n--- Contact BOOK ---\n");
    controller.dispatch(Command::Refresh)?;

    'outerloop: loop {
        cli::show_menu()?;

        let Some(action) = get_input(input)? else {
            break 'outerloop;
        };

        let choice = match parse_menu_choice(&action) {
            Ok(choice) => choice,
            Err(e) => {
                // User entered invalid command
                eprintln!("{e}");
                continue 'outerloop;
            }
        };

        match choice {
            MenuChoice::Add => {
                let mut fields = Vec::with_capacity(4);
                for label in ["name", "phone", "email", "address"] {
                    prompt(&format!("\nEnter contact {label}:"))?;
                    let Some(value) = get_input(input)? else {
                        break 'outerloop;
                    };
                    fields.push(value);
                }

                let form = ContactForm::new(&fields[0], &fields[1], &fields[2], &fields[3]);
                controller.set_form(form);
                controller.dispatch(Command::Add)?;
            }
            MenuChoice::Update => {
                if controller.selected().is_some() {
                    let mut fields = Vec::with_capacity(3);
                    for label in ["phone", "email", "address"] {
                        prompt(&format!("\nEnter new {label} (blank keeps current):"))?;
                        let Some(value) = get_input(input)? else {
                            break 'outerloop;
                        };
                        fields.push(value);
                    }

                    let name = controller.form().name.clone();
                    let form = ContactForm::new(&name, &fields[0], &fields[1], &fields[2]);
                    controller.set_form(form);
                }
                controller.dispatch(Command::Update)?;
            }
            MenuChoice::Delete => {
                if let Some(label) = controller.selected() {
                    // Confirm action
                    prompt(&format!("\nAre you sure you want to delete {label}? (y/n)"))?;
                    let Some(consent) = get_input_to_lower(input)? else {
                        break 'outerloop;
                    };
                    if consent != "y" {
                        continue 'outerloop;
                    }
                }
                controller.dispatch(Command::Delete)?;
            }
            MenuChoice::Search => {
                prompt("\nEnter contact name or phone number:")?;
                let query = get_input(input)?;
                controller.dispatch(Command::Search(query))?;
            }
            MenuChoice::View => {
                controller.dispatch(Command::Refresh)?;
            }
            MenuChoice::Select => {
                prompt("\nEnter list number:")?;
                let Some(entry) = get_input(input)? else {
                    break 'outerloop;
                };

                let selected = entry
                    .parse::<usize>()
                    .map_err(AppError::from)
                    .and_then(|number| match number.checked_sub(1) {
                        Some(index) => controller.select_index(index),
                        None => Err(AppError::NotFound("list entry 0".to_string())),
                    });

                match selected {
                    Ok(()) => println!("\n{}", display_form(controller.form())),
                    Err(e) if e.is_recoverable() => controller.view_mut().notify(&Notice::from(&e)),
                    Err(e) => return Err(e),
                }
            }
            MenuChoice::Exit => {
                println!("\nBye!");
                break 'outerloop;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{BufferView, MemStore};
    use std::io::Cursor;

    fn run_script(script: &str) -> Result<Controller<MemStore, BufferView>, AppError> {
        let mut controller = Controller::new(MemStore::new(), BufferView::new())?;
        run_interactive(&mut controller, &mut Cursor::new(script.to_string()))?;
        Ok(controller)
    }

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu_choice("1").unwrap(), MenuChoice::Add);
        assert_eq!(parse_menu_choice("7").unwrap(), MenuChoice::Exit);
        assert!(matches!(
            parse_menu_choice("9"),
            Err(AppError::ParseCommand(_))
        ));
    }

    #[test]
    fn add_select_update_session() -> Result<(), AppError> {
        let controller = run_script(
            "1\nAlice\n555-0001\n\n\n\
             1\nBob\n555-0002\nbob@example.com\n\n\
             6\n1\n\
             2\n555-9999\n\n1 Main St\n\
             7\n",
        )?;

        let alice = controller.contacts().get("Alice").unwrap();
        assert_eq!(alice.phone, "555-9999");
        assert_eq!(alice.address, "1 Main St");
        assert_eq!(
            controller.contacts().labels(),
            vec!["Alice - 555-9999", "Bob - 555-0002"]
        );
        assert_eq!(controller.storage().save_count(), 3);
        Ok(())
    }

    #[test]
    fn delete_needs_confirmation() -> Result<(), AppError> {
        let controller = run_script(
            "1\nAlice\n555-0001\n\n\n\
             6\n1\n\
             3\nn\n",
        )?;
        assert!(controller.contacts().contains("Alice"));

        let controller = run_script(
            "1\nAlice\n555-0001\n\n\n\
             6\n1\n\
             3\ny\n",
        )?;
        assert!(controller.contacts().is_empty());
        Ok(())
    }

    #[test]
    fn recoverable_errors_keep_the_session() -> Result<(), AppError> {
        // Unknown entry, delete without selection, bad list number, failed search
        let controller = run_script("42\n3\n6\nabc\n4\nzed\n1\nAlice\n555-0001\n\n\n")?;

        let titles: Vec<&str> = controller
            .view()
            .notices
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Selection Error", "Input Error", "Search Result", "Success"]
        );
        assert!(controller.contacts().contains("Alice"));
        Ok(())
    }
}
