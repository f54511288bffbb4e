//! Interactive menu loop.
//!
//! The shell only gathers input and renders results; every decision about the
//! data goes through [`UserbookApi`]. Any error raised by an operation is
//! reported as "Unexpected error" and the menu is shown again. The loop ends
//! on the exit option or at end of input.

use super::render::{write_candidates, write_messages, write_search_results, write_user_list};
use std::io::{BufRead, Write};
use userbook::api::{RemovalPlan, Selection, UserbookApi};
use userbook::error::Result;
use userbook::store::StorageBackend;
use userbook::validation::{parse_age, validate_name};

const MENU: [(&str, &str); 6] = [
    ("1", "Create JSON file"),
    ("2", "Add user"),
    ("3", "List users"),
    ("4", "Search user"),
    ("5", "Remove user"),
    ("6", "Exit"),
];

/// Line-oriented prompt over any reader/writer pair.
pub(crate) struct Console<R: BufRead, W: Write> {
    input: R,
    pub(crate) out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Next line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Shows `label` and reads the answer. End of input reads as empty.
    pub(crate) fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }
}

/// Prompts for the confirmation or pick a removal plan needs.
pub(crate) fn decide_removal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    plan: &RemovalPlan,
) -> Result<Selection> {
    match plan {
        RemovalPlan::Single(record) => {
            let answer = console.ask(&format!(
                "Confirm removal of user {} ({})? (y/n): ",
                record.name, record.email
            ))?;
            Ok(plan.confirm(&answer))
        }
        RemovalPlan::Multiple(candidates) => {
            write_candidates(&mut console.out, candidates)?;
            let input = console.ask("\nEnter the number of the user to remove (0 to cancel): ")?;
            Ok(plan.select(&input))
        }
        RemovalPlan::NotFound { .. } => Ok(plan.select("0")),
    }
}

pub(crate) struct Shell<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a UserbookApi<B>,
    console: Console<R, W>,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Shell<'a, B, R, W> {
    pub(crate) fn new(api: &'a UserbookApi<B>, input: R, out: W) -> Self {
        Self {
            api,
            console: Console::new(input, out),
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        writeln!(self.console.out, "Welcome to the JSON User Manager!")?;

        loop {
            self.write_menu()?;
            write!(self.console.out, "\nEnter your choice: ")?;
            self.console.out.flush()?;

            let Some(line) = self.console.read_line()? else {
                writeln!(self.console.out)?;
                return Ok(());
            };

            match line.trim() {
                "6" => {
                    writeln!(self.console.out, "Exiting... See you!")?;
                    return Ok(());
                }
                choice @ ("1" | "2" | "3" | "4" | "5") => {
                    if let Err(e) = self.dispatch(choice) {
                        tracing::debug!(error = %e, "operation failed");
                        writeln!(self.console.out, "Unexpected error: {}", e)?;
                    }
                }
                _ => writeln!(self.console.out, "Invalid option. Try again.")?,
            }
        }
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.console.out, "\nChoose an option:")?;
        for (key, label) in MENU {
            writeln!(self.console.out, "{}. {}", key, label)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<()> {
        match choice {
            "1" => self.create(),
            "2" => self.add(),
            "3" => self.list(),
            "4" => self.search(),
            _ => self.remove(),
        }
    }

    fn create(&mut self) -> Result<()> {
        let mut confirmed = false;
        if self.api.data_file_exists() {
            let answer = self
                .console
                .ask("File already exists. Overwrite it? (y/n): ")?;
            confirmed = userbook::commands::helpers::is_affirmative(&answer);
        }
        let result = self.api.create(confirmed)?;
        write_messages(&mut self.console.out, &result.messages)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        // Each field is checked as soon as it is typed; `add` checks them all again.
        let name = self.console.ask("Enter the user's name: ")?;
        if let Err(e) = validate_name(&name) {
            return self.report_invalid(e);
        }
        let age = self.console.ask("Enter the user's age: ")?;
        if let Err(e) = parse_age(&age) {
            return self.report_invalid(e);
        }
        let email = self.console.ask("Enter the user's email: ")?;

        let result = self.api.add(&name, &age, &email)?;
        write_messages(&mut self.console.out, &result.messages)?;
        Ok(())
    }

    fn report_invalid(&mut self, e: userbook::error::ValidationError) -> Result<()> {
        let message = userbook::api::CmdMessage::error(e.to_string());
        write_messages(&mut self.console.out, &[message])?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list()?;
        write_messages(&mut self.console.out, &result.messages)?;
        write_user_list(&mut self.console.out, &result.listed_records)?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let term = self.console.ask("Enter a name or email to search: ")?;
        let result = self.api.search(&term)?;
        write_messages(&mut self.console.out, &result.messages)?;
        write_search_results(&mut self.console.out, &result.listed_records)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        let name = self
            .console
            .ask("Enter the name of the user to remove: ")?;
        let console = &mut self.console;
        let result = self.api.remove(&name, |plan| decide_removal(console, plan))?;
        write_messages(&mut self.console.out, &result.messages)?;
        Ok(())
    }
}
