use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::config::Config;
use crate::error::BookResult;
use crate::model::AddressBook;
use crate::ops::{birthday_ops, contact_ops, Reply};
use crate::store::Session;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const HELLO_REPLY: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(Vec<String>),
    Skip,
    Quit,
}

/// Run the interactive REPL against the snapshot named in `config`.
pub fn run(config: &Config) -> BookResult<()> {
    let mut session = Session::open(&config.data_file)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl_loop(
        session.book_mut(),
        stdin.lock(),
        stdout.lock(),
        config.window_days,
    )?;

    session.close()
}

/// Reads commands until `exit`/`close` or end of input. Generic over the
/// streams so it can be driven from tests.
pub fn repl_loop<R: BufRead, W: Write>(
    book: &mut AddressBook,
    mut input: R,
    mut out: W,
    window_days: u32,
) -> io::Result<()> {
    writeln!(out, "{}", GREETING)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", FAREWELL)?;
            break;
        }

        match handle_line(book, &line, window_days, today()) {
            Step::Skip => continue,
            Step::Print(lines) => {
                for l in lines {
                    writeln!(out, "{}", l)?;
                }
            }
            Step::Quit => {
                writeln!(out, "{}", FAREWELL)?;
                break;
            }
        }
    }

    Ok(())
}

/// Tokenizes and executes one line of input.
pub fn handle_line(book: &mut AddressBook, line: &str, window_days: u32, today: NaiveDate) -> Step {
    match parse_input(line) {
        Some((command, args)) => dispatch(book, &command, &args, window_days, today),
        None => Step::Skip,
    }
}

/// Splits input into a lowercased command word and whitespace-separated arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

pub fn dispatch(
    book: &mut AddressBook,
    command: &str,
    args: &[&str],
    window_days: u32,
    today: NaiveDate,
) -> Step {
    debug!(command, args = args.len(), "dispatching");

    let result = match command {
        "close" | "exit" => return Step::Quit,
        "hello" => Ok(Reply::message(HELLO_REPLY)),
        "help" => Ok(Reply::Lines(help_lines())),

        "add" => contact_ops::add_contact(book, args),
        "change" => contact_ops::change_contact(book, args),
        "phone" => contact_ops::show_phone(book, args),
        "all" => Ok(contact_ops::show_all(book)),
        "delete" => contact_ops::delete_contact(book, args),
        "remove-phone" => contact_ops::remove_phone(book, args),

        "add-birthday" => birthday_ops::add_birthday(book, args),
        "show-birthday" => birthday_ops::show_birthday(book, args),
        "birthdays" => Ok(birthday_ops::birthdays(book, window_days, today)),

        _ => Ok(Reply::message(INVALID_COMMAND)),
    };

    match result {
        Ok(reply) => Step::Print(reply.into_lines()),
        Err(e) => {
            debug!(command, error = %e, "command failed");
            Step::Print(vec![e.user_message().to_string()])
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn help_lines() -> Vec<String> {
    [
        "COMMANDS:",
        "  hello                              Greet the bot",
        "  add <name> <phone>                 Add a contact or another phone",
        "  change <name> <old> <new>          Replace a phone number",
        "  phone <name>                       Show a contact's phones",
        "  remove-phone <name> <phone>        Remove a phone number",
        "  delete <name>                      Delete a contact",
        "  all                                List every contact",
        "  add-birthday <name> <DD.MM.YYYY>   Set a birthday",
        "  show-birthday <name>               Show a birthday",
        "  birthdays                          Birthdays in the next few days (--window-days)",
        "  help                               Show this help",
        "  exit / close                       Save and quit",
        "",
        "Phones are exactly 10 digits.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
