//! Interactive REPL mode

use std::io::{self, Write};

use addressbook_adapter::repository::InMemoryPersonRepository;
use addressbook_domain::{Appointment, Person};
use addressbook_usecase::AddressBook;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use shared::{Index, ParseError};
use tracing::warn;

use crate::card::PersonCard;
use crate::commands::Context;

/// Interactive session over an in-memory address book
pub struct InteractiveCli {
    book: AddressBook<InMemoryPersonRepository>,
    ctx: Context,
}

impl InteractiveCli {
    pub fn new(ctx: Context) -> anyhow::Result<Self> {
        let repository = InMemoryPersonRepository::new();
        let book = if ctx.config.load_sample_data {
            AddressBook::with_sample_data(repository)?
        } else {
            AddressBook::new(repository)
        };
        Ok(Self { book, ctx })
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Address Book Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            print!("[{} contacts] > ", self.book.count()?);
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /list                  - Show all contacts");
                println!("  /add                   - Add a contact (prompts for each field)");
                println!("  /find <keywords..>     - Show contacts whose name has a keyword");
                println!("  /delete <index>        - Delete the contact at index");
                println!("  /remark <index> <text> - Set the remark of the contact at index");
                println!("  /clear                 - Delete all contacts");
                println!("  /quit                  - Exit");
            }
            "/list" => {
                let people = self.book.list_persons()?;
                println!("{}", self.render_list(&people)?);
            }
            "/find" => {
                let keywords: Vec<&str> = rest.split_whitespace().collect();
                if keywords.is_empty() {
                    println!("Usage: /find <keyword> [more keywords]");
                } else {
                    let people = self.book.find_by_keywords(&keywords)?;
                    if !self.ctx.json {
                        println!("{} contacts listed", people.len());
                    }
                    println!("{}", self.render_list(&people)?);
                }
            }
            "/add" => {
                let person = prompt_person()?;
                let name = person.name().to_string();
                self.book.add_person(person)?;
                println!("New contact added: {}", name);
            }
            "/delete" => {
                let index = parser::parse_index(rest)?;
                let removed = self.book.delete_person(index)?;
                println!("Deleted contact: {}", removed.name());
            }
            "/remark" => {
                let (index, text) = match rest.split_once(char::is_whitespace) {
                    Some((index, text)) => (index, text),
                    None => (rest, ""),
                };
                let index = parser::parse_index(index)?;
                let edited = self.book.set_remark(index, parser::parse_remark(text))?;
                if edited.remark().is_empty() {
                    println!("Removed remark from: {}", edited.name());
                } else {
                    println!("Added remark to: {}", edited.name());
                }
            }
            "/clear" => {
                self.book.clear()?;
                println!("Address book has been cleared!");
            }
            _ => {
                warn!(command = cmd, "Unknown interactive command");
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    /// Cards separated by blank lines, or a JSON array with `--json`
    fn render_list(&self, people: &[Person]) -> anyhow::Result<String> {
        if self.ctx.json {
            return Ok(serde_json::to_string_pretty(people)?);
        }
        if people.is_empty() {
            return Ok("(no contacts)".to_string());
        }
        let cards: Vec<String> = people
            .iter()
            .enumerate()
            .map(|(i, person)| {
                let index = Index::from_zero_based(i);
                PersonCard::new(person, index.one_based()).render(self.ctx.config.card_width)
            })
            .collect();
        Ok(cards.join("\n\n"))
    }
}

/// Ask for one field until the answer parses
fn prompt_field<T>(
    prompt: &str,
    allow_empty: bool,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> anyhow::Result<String> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .validate_with(|input: &String| -> Result<(), String> {
            if allow_empty && input.trim().is_empty() {
                return Ok(());
            }
            parse(input.as_str()).map(|_| ()).map_err(|e| e.message)
        })
        .interact_text()?;
    Ok(answer)
}

fn split_list(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collect a full contact from the terminal, re-prompting on invalid input
fn prompt_person() -> anyhow::Result<Person> {
    let name = prompt_field("Name", false, parser::parse_name)?;
    let phone = prompt_field("Phone", false, parser::parse_phone)?;
    let email = prompt_field("Email", false, parser::parse_email)?;
    let address = prompt_field("Address", false, parser::parse_address)?;
    let nok_name = prompt_field("Next-of-kin name", false, parser::parse_name)?;
    let nok_phone = prompt_field("Next-of-kin phone", false, parser::parse_phone)?;

    let description = prompt_field("Appointment description (blank for none)", true, |s| {
        if Appointment::is_valid_description(s.trim()) {
            Ok(())
        } else {
            Err(ParseError::new(Appointment::MESSAGE_CONSTRAINTS))
        }
    })?;
    let appointment = if description.trim().is_empty() {
        None
    } else {
        let date = prompt_field(
            "Appointment date (dd-MM-yyyy HH:mm)",
            false,
            parser::parse_appointment_date,
        )?;
        Some(parser::parse_appointment(&description, &date)?)
    };

    let plans = prompt_field("Financial plans (comma-separated)", true, |s| {
        parser::parse_financial_plans(split_list(s))
    })?;
    let tags = prompt_field("Tags (comma-separated)", true, |s| {
        parser::parse_tags(split_list(s))
    })?;

    Ok(Person::new(
        parser::parse_name(&name)?,
        parser::parse_phone(&phone)?,
        parser::parse_email(&email)?,
        parser::parse_address(&address)?,
        parser::parse_name(&nok_name)?,
        parser::parse_phone(&nok_phone)?,
    )
    .with_appointment(appointment)
    .with_financial_plans(parser::parse_financial_plans(split_list(&plans))?)
    .with_tags(parser::parse_tags(split_list(&tags))?))
}
