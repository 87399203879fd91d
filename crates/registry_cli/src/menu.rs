//! Interactive customer management menu.
//!
//! # Responsibility
//! - Prompt for input, reprompt on validation failures, print feedback.
//! - Delegate every check and mutation to `CustomerService`.
//!
//! # Invariants
//! - One command runs to completion before the menu is shown again.
//! - Closed input ends the session instead of looping.

use log::debug;
use registry_core::{CustomerError, CustomerPatch, CustomerRepository, CustomerService, NameField};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line without its terminator.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask_valid<T>(
        &mut self,
        label: &str,
        blank_keeps: bool,
        check: impl Fn(&str) -> Result<T, CustomerError>,
    ) -> io::Result<Answer<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(Answer::Closed);
            };
            if blank_keeps && line.is_empty() {
                return Ok(Answer::Keep);
            }
            match check(&line) {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(err) => self.say(reprompt_message(&err))?,
            }
        }
    }
}

enum Answer<T> {
    Value(T),
    Keep,
    Closed,
}

impl<T> Answer<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Keep | Self::Closed => None,
        }
    }
}

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Continue,
    Exit,
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Update,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    /// Parses the exact option number; anything else is an invalid choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Register),
            "2" => Some(Self::Update),
            "3" => Some(Self::Delete),
            "4" => Some(Self::List),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn reprompt_message(err: &CustomerError) -> String {
    match err {
        CustomerError::DuplicateEmail(_) => format!("Error: {err} Enter a different email."),
        _ => format!("Error: {err} Try again."),
    }
}

/// Runs the menu until the user exits or input is closed.
pub fn run<Repo, R, W>(
    service: &mut CustomerService<Repo>,
    console: &mut Console<R, W>,
) -> io::Result<()>
where
    Repo: CustomerRepository,
    R: BufRead,
    W: Write,
{
    loop {
        print_menu(console)?;
        let Some(input) = console.prompt("Select an option: ")? else {
            return Ok(());
        };

        let session = match MenuChoice::parse(&input) {
            Some(MenuChoice::Register) => register(service, console)?,
            Some(MenuChoice::Update) => update(service, console)?,
            Some(MenuChoice::Delete) => delete(service, console)?,
            Some(MenuChoice::List) => list(service, console)?,
            Some(MenuChoice::Exit) => {
                console.say("Leaving customer management menu...")?;
                Session::Exit
            }
            None => {
                debug!(
                    "event=menu_select module=cli status=rejected reason=invalid_menu_choice"
                );
                console.say("Error: Invalid option.")?;
                Session::Continue
            }
        };

        if session == Session::Exit {
            return Ok(());
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("")?;
    console.say("--- Customer Management Menu ---")?;
    console.say("1. Register customer")?;
    console.say("2. Update customer")?;
    console.say("3. Delete customer")?;
    console.say("4. List customers")?;
    console.say("5. Exit")
}

fn register<Repo, R, W>(
    service: &mut CustomerService<Repo>,
    console: &mut Console<R, W>,
) -> io::Result<Session>
where
    Repo: CustomerRepository,
    R: BufRead,
    W: Write,
{
    let Answer::Value(first_name) = console.ask_valid("First name: ", false, |text| {
        service.check_name(NameField::FirstName, text)
    })?
    else {
        return Ok(Session::Exit);
    };
    let Answer::Value(last_name) = console.ask_valid("Last name: ", false, |text| {
        service.check_name(NameField::LastName, text)
    })?
    else {
        return Ok(Session::Exit);
    };
    let Answer::Value(email) =
        console.ask_valid("Email: ", false, |text| service.check_new_email(text, None))?
    else {
        return Ok(Session::Exit);
    };

    match service.register(&first_name, &last_name, &email) {
        Ok(customer) => console.say(format!(
            "Customer '{}' registered successfully.",
            customer.full_name()
        ))?,
        Err(err) => console.say(format!("Error: {err}"))?,
    }
    Ok(Session::Continue)
}

fn update<Repo, R, W>(
    service: &mut CustomerService<Repo>,
    console: &mut Console<R, W>,
) -> io::Result<Session>
where
    Repo: CustomerRepository,
    R: BufRead,
    W: Write,
{
    let Some(target) = console.prompt("Email of the customer to update: ")? else {
        return Ok(Session::Exit);
    };
    if service.find(&target).is_none() {
        console.say(format!(
            "Error: {}",
            CustomerError::RecordNotFound(target)
        ))?;
        return Ok(Session::Continue);
    }

    let first_name = console.ask_valid("New first name (leave blank to keep): ", true, |text| {
        service.check_name(NameField::FirstName, text)
    })?;
    if matches!(first_name, Answer::Closed) {
        return Ok(Session::Exit);
    }
    let last_name = console.ask_valid("New last name (leave blank to keep): ", true, |text| {
        service.check_name(NameField::LastName, text)
    })?;
    if matches!(last_name, Answer::Closed) {
        return Ok(Session::Exit);
    }
    let email = console.ask_valid("New email (leave blank to keep): ", true, |text| {
        service.check_new_email(text, Some(target.as_str()))
    })?;
    if matches!(email, Answer::Closed) {
        return Ok(Session::Exit);
    }

    let patch = CustomerPatch {
        first_name: first_name.into_option(),
        last_name: last_name.into_option(),
        email: email.into_option(),
    };
    match service.update(&target, patch) {
        Ok(_) => console.say(format!("Customer '{target}' updated successfully."))?,
        Err(err) => console.say(format!("Error: {err}"))?,
    }
    Ok(Session::Continue)
}

fn delete<Repo, R, W>(
    service: &mut CustomerService<Repo>,
    console: &mut Console<R, W>,
) -> io::Result<Session>
where
    Repo: CustomerRepository,
    R: BufRead,
    W: Write,
{
    let Some(email) = console.prompt("Email of the customer to delete: ")? else {
        return Ok(Session::Exit);
    };
    match service.delete(&email) {
        Ok(_) => console.say(format!("Customer with email '{email}' deleted successfully."))?,
        Err(err) => console.say(format!("Error: {err}"))?,
    }
    Ok(Session::Continue)
}

fn list<Repo, R, W>(
    service: &CustomerService<Repo>,
    console: &mut Console<R, W>,
) -> io::Result<Session>
where
    Repo: CustomerRepository,
    R: BufRead,
    W: Write,
{
    let customers = service.list();
    if customers.is_empty() {
        console.say("No customers registered.")?;
        return Ok(Session::Continue);
    }

    console.say("")?;
    console.say("--- Registered customers ---")?;
    for customer in customers {
        console.say(format!(
            "Name: {}, Email: {}",
            customer.full_name(),
            customer.email
        ))?;
    }
    Ok(Session::Continue)
}
