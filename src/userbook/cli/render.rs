use colored::Colorize;
use std::io::{self, Write};
use userbook::api::{CmdMessage, MessageLevel};
use userbook::config::UserbookConfig;
use userbook::model::Record;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub(crate) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", format!("Error: {}", message.content).red())?,
        }
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "Name: {}", record.name)?;
    writeln!(out, "Age: {}", record.age)?;
    writeln!(out, "Email: {}", record.email)
}

/// Every user, separated by rules, followed by the total.
pub(crate) fn write_user_list<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{}", "Registered users:".bold())?;
    writeln!(out, "{}", rule())?;
    for record in records {
        write_record(out, record)?;
        writeln!(out, "{}", rule())?;
    }
    writeln!(out, "Total users: {}", records.len())
}

pub(crate) fn write_search_results<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n{}", "Users found:".bold())?;
    writeln!(out, "{}", rule())?;
    for record in records {
        write_record(out, record)?;
        writeln!(out, "{}", rule())?;
    }
    Ok(())
}

/// Same-named users, numbered from 1 for selection.
pub(crate) fn write_candidates<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(out, "\nMultiple users found with that name:")?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "\n{}.", (i + 1).to_string().yellow())?;
        write_record(out, record)?;
    }
    Ok(())
}

pub(crate) fn write_config<W: Write>(out: &mut W, config: &UserbookConfig) -> io::Result<()> {
    for (key, value) in config.entries() {
        writeln!(out, "{} = {}", key, value)?;
    }
    Ok(())
}
