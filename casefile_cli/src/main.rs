//! # Case File CLI
//!
//! Terminal front end over `casefile_core`. Without a subcommand it starts an
//! interactive shell; the subcommands run a single action and exit.
//!
//! State lives in `<data_dir>/casefile.json`; see `casefile_core::config` for
//! how the data directory is chosen.

mod args;
mod shell;
mod view;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use casefile_core::config::Settings;
use casefile_core::errors::{CaseError, CaseResult};
use casefile_core::list_editor::{AppendOutcome, RestoreOutcome};
use casefile_core::timeline::EXPORT_FILE_NAME;
use casefile_core::tips::SubmitOutcome;
use casefile_core::{Action, CaseFile, FileStore};

use args::{Cli, Command, QuotesCommand, TimelineCommand, TipCommand};
use shell::{save_download, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_recoverable() {
                eprintln!("Close the other Case File window or session and try again.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CaseResult<ExitCode> {
    let mut settings = Settings::load();
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }

    if let Some(Command::Settings { save }) = cli.command {
        return show_settings(&settings, save);
    }

    let store = FileStore::open(&settings.store_path(), whoami::username())?;
    let (mut app, report) = CaseFile::startup(store, settings.dates.clone())?;
    for (name, outcome) in [("timeline", report.timeline), ("quotes", report.quotes)] {
        if outcome == RestoreOutcome::Corrupt {
            eprintln!("warning: saved {} could not be read and was skipped", name);
        }
    }

    match cli.command.unwrap_or(Command::Shell) {
        Command::Show { panel } => {
            if let Some(id) = panel {
                app.dispatch(Action::Navigate(id))?;
            }
            println!("{}\n\n{}", view::nav_bar(&app), view::active_panel(&app)?);
        }
        Command::Timeline { command } => match command {
            TimelineCommand::Add { text } => {
                let outcome = match text {
                    Some(text) => app.add_timeline(Some(&text)),
                    None => app.add_timeline_from(&mut terminal()),
                };
                report_append(outcome?);
            }
            TimelineCommand::List => print_rows(&app.timeline.display(), "(no events yet)"),
            TimelineCommand::Export { out } => {
                let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
                let written = save_download(&app.timeline.export()?, &path)?;
                println!("Saved {}", written.display());
            }
        },
        Command::Quotes { command } => match command {
            QuotesCommand::Add { text } => {
                let outcome = match text {
                    Some(text) => app.add_quote(Some(&text)),
                    None => app.add_quote_from(&mut terminal()),
                };
                report_append(outcome?);
            }
            QuotesCommand::List => print_rows(&app.quotes.display(), "(no quotes yet)"),
        },
        Command::Tip { command } => match command {
            TipCommand::Submit { name, contact, message } => {
                app.tip_form.name = name;
                app.tip_form.contact = contact;
                app.tip_form.message = message;
                let outcome = app.submit_tip()?;
                match outcome {
                    SubmitOutcome::Rejected => {
                        eprintln!("{}", outcome.notice());
                        return Ok(ExitCode::FAILURE);
                    }
                    SubmitOutcome::Saved(_) => println!("{}", outcome.notice()),
                }
            }
            TipCommand::List => {
                let tips = app.tips()?;
                if tips.is_empty() {
                    println!("(no tips saved)");
                }
                for tip in tips {
                    let from = match (tip.name.as_str(), tip.contact.as_str()) {
                        ("", "") => "anonymous".to_string(),
                        (name, "") => name.to_string(),
                        ("", contact) => contact.to_string(),
                        (name, contact) => format!("{} <{}>", name, contact),
                    };
                    println!("{}  {}\n    {}", tip.date, from, tip.message);
                }
            }
        },
        Command::Settings { .. } => {}
        Command::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(stdin.lock(), stdout.lock()).run(&mut app, Path::new("."))?;
        }
    }

    io::stdout().flush().ok();
    Ok(ExitCode::SUCCESS)
}

/// Print the settings in effect; with `save`, persist them to settings.json
fn show_settings(settings: &Settings, save: bool) -> CaseResult<ExitCode> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    println!("store: {}", settings.store_path().display());

    if save {
        let path = Settings::config_path()
            .ok_or_else(|| CaseError::file_error("save settings", "settings.json", "no config directory"))?;
        settings.save_to(&path)?;
        println!("Saved {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn terminal() -> Shell<io::StdinLock<'static>, io::Stdout> {
    Shell::new(io::stdin().lock(), io::stdout())
}

fn report_append(outcome: AppendOutcome) {
    match outcome {
        AppendOutcome::Cancelled => println!("Cancelled; nothing added."),
        AppendOutcome::Appended { index } => println!("Added entry #{}.", index + 1),
    }
}

fn print_rows(rows: &[String], empty: &str) {
    for line in view::numbered(rows, empty) {
        println!("{}", line);
    }
}
