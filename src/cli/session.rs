//! Interactive menu loop over an [`AddressBookManager`].
//!
//! Every command collects its answers, runs one store operation and
//! reports the outcome. Store errors are printed and the loop continues;
//! only I/O failures end the session with an error.

use super::prompt::{InputClosed, Prompt};
use crate::book::{AddressBookManager, SortKey};
use crate::domain::{ContactField, ContactKey};
use crate::error::AddressBookError;
use crate::models::{Contact, ContactInput, ContactPatch};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateBook,
    ListBooks,
    AddContact,
    ListContacts,
    UpdateContact,
    DeleteContact,
    CountContacts,
    FindByCityOrState,
    SearchByName,
    SortContacts,
    CountByCityAndState,
    FindInAllBooks,
    ExportBook,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order; `Exit` is shown last as `0`.
    pub const ALL: [MenuChoice; 14] = [
        MenuChoice::CreateBook,
        MenuChoice::ListBooks,
        MenuChoice::AddContact,
        MenuChoice::ListContacts,
        MenuChoice::UpdateContact,
        MenuChoice::DeleteContact,
        MenuChoice::CountContacts,
        MenuChoice::FindByCityOrState,
        MenuChoice::SearchByName,
        MenuChoice::SortContacts,
        MenuChoice::CountByCityAndState,
        MenuChoice::FindInAllBooks,
        MenuChoice::ExportBook,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> usize {
        match self {
            Self::CreateBook => 1,
            Self::ListBooks => 2,
            Self::AddContact => 3,
            Self::ListContacts => 4,
            Self::UpdateContact => 5,
            Self::DeleteContact => 6,
            Self::CountContacts => 7,
            Self::FindByCityOrState => 8,
            Self::SearchByName => 9,
            Self::SortContacts => 10,
            Self::CountByCityAndState => 11,
            Self::FindInAllBooks => 12,
            Self::ExportBook => 13,
            Self::Exit => 0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CreateBook => "Create address book",
            Self::ListBooks => "List address books",
            Self::AddContact => "Add contact",
            Self::ListContacts => "List contacts",
            Self::UpdateContact => "Update contact",
            Self::DeleteContact => "Delete contact",
            Self::CountContacts => "Count contacts",
            Self::FindByCityOrState => "Find contacts by city or state",
            Self::SearchByName => "Search contacts by name",
            Self::SortContacts => "Sort contacts",
            Self::CountByCityAndState => "Count contacts by city and state",
            Self::FindInAllBooks => "Find by city or state in all address books",
            Self::ExportBook => "Export address book as JSON",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}. {}", self.number(), self.description())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid choice: {}", s.trim()))?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| format!("Invalid choice: {}", number))
    }
}

/// An interactive session reading commands from `R` and writing to `W`.
pub struct Session<R, W> {
    manager: AddressBookManager,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(manager: AddressBookManager, input: R, output: W) -> Self {
        Self {
            manager,
            prompt: Prompt::new(input, output),
        }
    }

    /// Give back the manager and the output sink once the session is over.
    pub fn into_parts(self) -> (AddressBookManager, W) {
        (self.manager, self.prompt.into_output())
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        tracing::info!("Session started");
        self.prompt.say("Welcome to the Address Book!")?;

        loop {
            self.show_menu()?;
            let Some(answer) = self.prompt.ask("Choice")? else {
                break;
            };

            let choice = match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => choice,
                Err(message) => {
                    self.prompt.say(format!("Error: {}", message))?;
                    continue;
                }
            };

            tracing::debug!(?choice, "Menu choice");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e) if e.downcast_ref::<InputClosed>().is_some() => break,
                Err(e) => match e.downcast_ref::<AddressBookError>() {
                    Some(store_error) => {
                        tracing::warn!(?choice, error = %store_error, "Command failed");
                        self.prompt.say(format!("Error: {}", store_error))?;
                    }
                    None => return Err(e),
                },
            }
        }

        self.prompt.say("Goodbye!")?;
        tracing::info!("Session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        self.prompt.say("")?;
        for choice in MenuChoice::ALL {
            self.prompt.say(choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        match choice {
            MenuChoice::CreateBook => self.create_book(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::AddContact => self.add_contact(),
            MenuChoice::ListContacts => self.list_contacts(),
            MenuChoice::UpdateContact => self.update_contact(),
            MenuChoice::DeleteContact => self.delete_contact(),
            MenuChoice::CountContacts => self.count_contacts(),
            MenuChoice::FindByCityOrState => self.find_by_city_or_state(),
            MenuChoice::SearchByName => self.search_by_name(),
            MenuChoice::SortContacts => self.sort_contacts(),
            MenuChoice::CountByCityAndState => self.count_by_city_and_state(),
            MenuChoice::FindInAllBooks => self.find_in_all_books(),
            MenuChoice::ExportBook => self.export_book(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_book(&mut self) -> anyhow::Result<()> {
        let name = self.prompt.ask_required("Address Book Name")?;
        let book = self.manager.create_address_book(&name)?;
        let message = format!("Address book '{}' created.", book.name());
        self.prompt.say(message)?;
        Ok(())
    }

    fn list_books(&mut self) -> anyhow::Result<()> {
        if self.manager.is_empty() {
            self.prompt.say("No address books yet.")?;
            return Ok(());
        }

        let lines: Vec<String> = self
            .manager
            .list_address_books()
            .map(|(name, count)| format!("{} ({} contacts)", name, count))
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn add_contact(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        // Fail before collecting eight answers for a book that does not exist
        self.manager.address_book(&book_name)?;

        let mut input = ContactInput::default();
        for field in ContactField::ALL {
            *input.field_mut(field) = self.prompt.ask_required(field.label())?;
        }
        let contact = Contact::try_from(input).map_err(AddressBookError::from)?;

        self.manager
            .address_book_mut(&book_name)?
            .add_contact(contact)?;
        self.prompt.say("Contact added successfully!")?;
        Ok(())
    }

    fn list_contacts(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let book = self.manager.address_book(&book_name)?;

        let lines: Vec<String> = if book.is_empty() {
            vec![format!("Address book '{}' is empty.", book.name())]
        } else {
            std::iter::once(format!("Address book '{}':", book.name()))
                .chain(book.list_contacts())
                .collect()
        };
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn update_contact(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let key = self.ask_contact_key()?;

        let current = self
            .manager
            .address_book(&book_name)?
            .get_contact(&key)
            .cloned()
            .ok_or_else(|| AddressBookError::ContactNotFound(key.clone()))?;

        self.prompt
            .say("Enter new values, or leave blank to keep the current one.")?;
        let mut patch = ContactPatch::new();
        for field in ContactField::ALL {
            let label = format!("{} [{}]", field.label(), current.get(field));
            let answer = self.prompt.ask_required(&label)?;
            if !answer.is_empty() && answer != current.get(field) {
                patch.set(field, answer);
            }
        }

        if patch.is_empty() {
            self.prompt.say("No changes.")?;
            return Ok(());
        }

        let updated = self
            .manager
            .address_book_mut(&book_name)?
            .update_contact(&key, &patch)?
            .display();
        self.prompt.say(format!("Contact updated: {}", updated))?;
        Ok(())
    }

    fn delete_contact(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let key = self.ask_contact_key()?;

        let removed = self
            .manager
            .address_book_mut(&book_name)?
            .delete_contact(&key)?;
        self.prompt
            .say(format!("Contact deleted: {}", removed.full_name()))?;
        Ok(())
    }

    fn count_contacts(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let book = self.manager.address_book(&book_name)?;
        let message = format!("Address book '{}' has {} contacts.", book.name(), book.count());
        self.prompt.say(message)?;
        Ok(())
    }

    fn find_by_city_or_state(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let value = self.prompt.ask_required("City or State")?;

        let lines: Vec<String> = self
            .manager
            .address_book(&book_name)?
            .find_by_city_or_state(&value)
            .into_iter()
            .map(Contact::display)
            .collect();
        self.print_matches(lines, &value)
    }

    fn search_by_name(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let query = self.prompt.ask_required("Name")?;

        let lines: Vec<String> = self
            .manager
            .address_book(&book_name)?
            .find_by_name(&query)
            .into_iter()
            .map(Contact::display)
            .collect();
        self.print_matches(lines, &query)
    }

    fn sort_contacts(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let answer = self.prompt.ask_required("Sort By (name/city/state/zip)")?;
        let sort_key = match answer.parse::<SortKey>() {
            Ok(key) => key,
            Err(message) => {
                self.prompt.say(format!("Error: {}", message))?;
                return Ok(());
            }
        };

        let lines: Vec<String> = self
            .manager
            .address_book(&book_name)?
            .sorted_by(sort_key)
            .into_iter()
            .enumerate()
            .map(|(index, contact)| {
                format!(
                    "{}. {} ({}, {} {})",
                    index + 1,
                    contact.display(),
                    contact.city(),
                    contact.state(),
                    contact.zip()
                )
            })
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn count_by_city_and_state(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let book = self.manager.address_book(&book_name)?;

        let mut lines = vec!["By city:".to_string()];
        lines.extend(
            book.count_by_city()
                .into_iter()
                .map(|(city, count)| format!("  {}: {}", city, count)),
        );
        lines.push("By state:".to_string());
        lines.extend(
            book.count_by_state()
                .into_iter()
                .map(|(state, count)| format!("  {}: {}", state, count)),
        );
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn find_in_all_books(&mut self) -> anyhow::Result<()> {
        let value = self.prompt.ask_required("City or State")?;
        let lines: Vec<String> = self
            .manager
            .find_by_city_or_state(&value)
            .into_iter()
            .map(|(book, contact)| format!("[{}] {}", book, contact.display()))
            .collect();
        self.print_matches(lines, &value)
    }

    fn export_book(&mut self) -> anyhow::Result<()> {
        let book_name = self.ask_book_name()?;
        let json = serde_json::to_string_pretty(self.manager.address_book(&book_name)?)?;
        self.prompt.say(json)?;
        Ok(())
    }

    fn print_matches(&mut self, lines: Vec<String>, query: &str) -> anyhow::Result<()> {
        if lines.is_empty() {
            self.prompt
                .say(format!("No contacts found matching '{}'.", query))?;
            return Ok(());
        }
        for line in lines {
            self.prompt.say(format!("- {}", line))?;
        }
        Ok(())
    }

    fn ask_book_name(&mut self) -> anyhow::Result<String> {
        self.prompt.ask_required("Address Book Name")
    }

    fn ask_contact_key(&mut self) -> anyhow::Result<ContactKey> {
        let first_name = self.prompt.ask_required(ContactField::FirstName.label())?;
        let last_name = self.prompt.ask_required(ContactField::LastName.label())?;
        Ok(ContactKey::new(first_name, last_name))
    }
}
