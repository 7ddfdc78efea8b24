//! Interactive session: one command per line, the active panel re-printed
//! after every change.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use casefile_core::errors::{CaseError, CaseResult};
use casefile_core::file_io::write_atomic;
use casefile_core::list_editor::Prompt;
use casefile_core::navigation::TIPS_PANEL;
use casefile_core::timeline::Download;
use casefile_core::{Action, CaseFile, Effect, KeyValueStore};

use crate::view;

const HELP: &str = "\
Commands:
  panels                 list panels
  show <panel>           switch panel (summary, timeline, quotes, tips)
  view-timeline          jump to the timeline
  add-timeline           add a timeline event
  export-timeline [path] write timeline.json
  add-quote              add a quote
  tip                    fill in and submit the tip form
  clear-tip              reset the tip form
  help                   this text
  quit                   leave";

/// Line-oriented terminal driver over any reader/writer pair
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    /// Next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `question` and read the answer; end of input counts as cancel
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Write one line of output
    pub fn say(&mut self, text: &str) -> CaseResult<()> {
        writeln!(self.output, "{}", text).map_err(stdout_error)
    }

    /// Print the navigation bar and the active panel
    pub fn render<S: KeyValueStore>(&mut self, app: &CaseFile<S>) -> CaseResult<()> {
        let page = format!("{}\n\n{}\n", view::nav_bar(app), view::active_panel(app)?);
        self.say(&page)
    }

    /// Report an effect to the user
    pub fn apply(&mut self, effect: Effect, export_dir: &Path) -> CaseResult<()> {
        match effect {
            Effect::None => Ok(()),
            Effect::Notice(notice) => self.say(&format!("! {}", notice)),
            Effect::Download(download) => {
                let path = save_download(&download, &export_dir.join(&download.file_name))?;
                self.say(&format!("Saved {}", path.display()))
            }
        }
    }

    /// Run until `quit` or end of input.
    ///
    /// Store failures are printed and the session continues.
    pub fn run<S: KeyValueStore>(&mut self, app: &mut CaseFile<S>, export_dir: &Path) -> CaseResult<()> {
        self.render(app)?;
        loop {
            let Some(line) = self.ask(">").map_err(stdin_error)? else {
                return Ok(());
            };
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let argument = words.next();

            let result = match command {
                "quit" | "exit" => return Ok(()),
                "help" => self.say(HELP),
                "panels" => {
                    let ids: Vec<String> = app
                        .navigator
                        .panels()
                        .iter()
                        .map(|p| format!("{:<10} {}", p.id, p.label))
                        .collect();
                    self.say(&ids.join("\n"))
                }
                "show" => match argument {
                    Some(id) => self.step(app, Action::Navigate(id.to_string()), export_dir),
                    None => self.say("usage: show <panel>"),
                },
                "view-timeline" => self.step(app, Action::ShowTimeline, export_dir),
                "add-timeline" => app
                    .add_timeline_from(&mut *self)
                    .and_then(|_| self.render(app)),
                "add-quote" => app.add_quote_from(&mut *self).and_then(|_| self.render(app)),
                "export-timeline" => match argument {
                    Some(path) => app
                        .timeline
                        .export()
                        .and_then(|d| save_download(&d, Path::new(path)))
                        .and_then(|p| self.say(&format!("Saved {}", p.display()))),
                    None => self.step(app, Action::ExportTimeline, export_dir),
                },
                "tip" => self.fill_tip(app, export_dir),
                "clear-tip" => self.step(app, Action::ClearTip, export_dir),
                other => self.say(&format!("Unknown command '{}'. Type `help`.", other)),
            };

            if let Err(e) = result {
                self.say(&format!("Error: {}", e))?;
            }
        }
    }

    fn step<S: KeyValueStore>(&mut self, app: &mut CaseFile<S>, action: Action, export_dir: &Path) -> CaseResult<()> {
        let effect = app.dispatch(action)?;
        self.apply(effect, export_dir)?;
        self.render(app)
    }

    fn fill_tip<S: KeyValueStore>(&mut self, app: &mut CaseFile<S>, export_dir: &Path) -> CaseResult<()> {
        app.dispatch(Action::Navigate(TIPS_PANEL.to_string()))?;
        let Some(name) = self.ask("Name:").map_err(stdin_error)? else {
            return Ok(());
        };
        let Some(contact) = self.ask("Contact:").map_err(stdin_error)? else {
            return Ok(());
        };
        let Some(message) = self.ask("Message:").map_err(stdin_error)? else {
            return Ok(());
        };

        app.tip_form.name = name;
        app.tip_form.contact = contact;
        app.tip_form.message = message;
        self.step(app, Action::SubmitTip, export_dir)
    }
}

impl<R: BufRead, W: Write> Prompt for Shell<R, W> {
    fn ask(&mut self, question: &str) -> Option<String> {
        match Shell::ask(self, question) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Failed to read answer: {}", e);
                None
            }
        }
    }
}

/// Write a download to `path`, returning where it landed
pub fn save_download(download: &Download, path: &Path) -> CaseResult<PathBuf> {
    write_atomic(path, &download.contents)?;
    Ok(path.to_path_buf())
}

fn stdin_error(e: io::Error) -> CaseError {
    CaseError::file_error("read", "stdin", e.to_string())
}

fn stdout_error(e: io::Error) -> CaseError {
    CaseError::file_error("write", "stdout", e.to_string())
}
