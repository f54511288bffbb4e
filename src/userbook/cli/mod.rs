//! # CLI Layer
//!
//! One possible UI client for userbook. This is the only place that reads
//! stdin, writes stdout/stderr and decides exit codes.
//!
//! - `run()`: parses arguments, sets up logging and the API, dispatches
//! - `handle_*()`: one-shot subcommands
//! - [`shell`]: the interactive menu, used when no subcommand is given
//! - [`render`]: turns `CmdResult`s into terminal output

mod args;
mod render;
mod shell;

use args::{Cli, Commands};
use clap::Parser;
use render::{write_config, write_messages, write_search_results, write_user_list};
use shell::{decide_removal, Console, Shell};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use userbook::api::{CmdResult, ConfigAction, UserbookApi};
use userbook::commands::helpers::is_affirmative;
use userbook::error::Result;
use userbook::init::initialize;
use userbook::model::Scope;
use userbook::store::fs_backend::FsBackend;

struct AppContext {
    api: UserbookApi<FsBackend>,
    scope: Scope,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    let result = match cli.command {
        Some(Commands::Create { yes }) => handle_create(&ctx, yes)?,
        Some(Commands::Add { name, age, email }) => handle_add(&ctx, &name, &age, &email)?,
        Some(Commands::List) => handle_list(&ctx)?,
        Some(Commands::Search { term }) => handle_search(&ctx, &term)?,
        Some(Commands::Remove { name, yes, pick }) => handle_remove(&ctx, &name, yes, pick)?,
        Some(Commands::Path) => handle_path(&ctx)?,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value)?,
        Some(Commands::Shell) | None => return handle_shell(&ctx),
    };

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "userbook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global, cli.file.clone())?;
    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
    })
}

fn stdin_console() -> Console<io::StdinLock<'static>, io::Stdout> {
    Console::new(io::stdin().lock(), io::stdout())
}

fn print_messages(result: &CmdResult) -> Result<()> {
    let mut out = io::stdout().lock();
    write_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}

fn handle_create(ctx: &AppContext, yes: bool) -> Result<CmdResult> {
    let mut confirmed = yes;
    if !confirmed && ctx.api.data_file_exists() {
        let answer = stdin_console().ask("File already exists. Overwrite it? (y/n): ")?;
        confirmed = is_affirmative(&answer);
    }
    let result = ctx.api.create(confirmed)?;
    print_messages(&result)?;
    Ok(result)
}

fn handle_add(ctx: &AppContext, name: &str, age: &str, email: &str) -> Result<CmdResult> {
    let result = ctx.api.add(name, age, email)?;
    print_messages(&result)?;
    Ok(result)
}

fn handle_list(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.list()?;
    print_messages(&result)?;
    write_user_list(&mut io::stdout().lock(), &result.listed_records)?;
    Ok(result)
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<CmdResult> {
    let result = ctx.api.search(term)?;
    print_messages(&result)?;
    write_search_results(&mut io::stdout().lock(), &result.listed_records)?;
    Ok(result)
}

fn handle_remove(
    ctx: &AppContext,
    name: &str,
    yes: bool,
    pick: Option<String>,
) -> Result<CmdResult> {
    let result = ctx.api.remove(name, |plan| match (&pick, yes) {
        (Some(input), _) => Ok(plan.select(input)),
        (None, true) if plan.candidates().len() == 1 => Ok(plan.confirm("y")),
        _ => decide_removal(&mut stdin_console(), plan),
    })?;
    print_messages(&result)?;
    Ok(result)
}

fn handle_path(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.data_path()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    Ok(result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        write_config(&mut io::stdout().lock(), config)?;
    }
    print_messages(&result)?;
    Ok(result)
}

fn handle_shell(ctx: &AppContext) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&ctx.api, stdin.lock(), stdout.lock()).run()?;
    Ok(ExitCode::SUCCESS)
}
