//! # Case File GUI Application
//!
//! Graphical front end for the case file site, built with Iced for native
//! desktops and the browser (WASM).
//!
//! The window mirrors the site: a navigation toolbar, one panel at a time,
//! and modal dialogs for the add prompts and notices. All state changes go
//! through `casefile_core::CaseFile`; this crate only turns widget events
//! into actions and effects into dialogs.

mod platform;
mod ui;

use iced::widget::{column, container, rule, stack};
use iced::{Element, Length, Task};

use casefile_core::list_editor::RestoreOutcome;
use casefile_core::{Action, CaseFile, Effect, KeyValueStore};

use ui::modal::{ModalType, PromptTarget};

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(String),
    ShowTimeline,

    // List editors
    AddTimeline,
    ExportTimeline,
    AddQuote,

    // Prompt modal
    PromptInputChanged(String),
    PromptConfirm,
    ModalCancel,
    NoticeDismissed,

    // Tip form
    TipNameChanged(String),
    TipContactChanged(String),
    TipMessageChanged(String),
    SubmitTip,
    ClearTip,
}

pub struct App {
    pub case_file: CaseFile<Box<dyn KeyValueStore>>,
    pub modal: Option<ModalType>,
    pub store_label: String,
    pub status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let opened = platform::open_store();
        let mut status = opened.warning.unwrap_or_else(|| "Ready".to_string());

        let case_file = match CaseFile::startup(opened.store, opened.dates.clone()) {
            Ok((case_file, report)) => {
                let unreadable: Vec<&str> = [("timeline", report.timeline), ("quotes", report.quotes)]
                    .into_iter()
                    .filter(|(_, outcome)| *outcome == RestoreOutcome::Corrupt)
                    .map(|(name, _)| name)
                    .collect();
                if !unreadable.is_empty() {
                    status = format!("Could not read saved {}", unreadable.join(" and "));
                }
                case_file
            }
            Err(e) => {
                log::error!("Startup restore failed: {}", e);
                status = format!("Could not load saved data: {}", e);
                CaseFile::new(Box::new(casefile_core::MemoryStore::new()) as Box<dyn KeyValueStore>, opened.dates)
            }
        };

        (
            App {
                case_file,
                modal: None,
                store_label: opened.label,
                status,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(id) => {
                self.dispatch(Action::Navigate(id));
                return ui::focus_active_panel(&self.case_file.navigator);
            }
            Message::ShowTimeline => {
                self.dispatch(Action::ShowTimeline);
                return ui::focus_active_panel(&self.case_file.navigator);
            }

            Message::AddTimeline => self.open_prompt(PromptTarget::Timeline),
            Message::AddQuote => self.open_prompt(PromptTarget::Quote),
            Message::ExportTimeline => self.dispatch(Action::ExportTimeline),

            Message::PromptInputChanged(value) => {
                if let Some(ModalType::Prompt { input, .. }) = &mut self.modal {
                    *input = value;
                }
            }
            Message::PromptConfirm => {
                if let Some(ModalType::Prompt { target, input, .. }) = self.modal.take() {
                    self.dispatch(target.action(Some(input)));
                }
            }
            Message::ModalCancel => {
                if let Some(ModalType::Prompt { target, .. }) = self.modal.take() {
                    self.dispatch(target.action(None));
                }
            }
            Message::NoticeDismissed => self.modal = None,

            Message::TipNameChanged(value) => self.case_file.tip_form.name = value,
            Message::TipContactChanged(value) => self.case_file.tip_form.contact = value,
            Message::TipMessageChanged(value) => self.case_file.tip_form.message = value,
            Message::SubmitTip => self.dispatch(Action::SubmitTip),
            Message::ClearTip => self.dispatch(Action::ClearTip),
        }
        Task::none()
    }

    fn open_prompt(&mut self, target: PromptTarget) {
        let question = match target {
            PromptTarget::Timeline => self.case_file.timeline.prompt_text(),
            PromptTarget::Quote => self.case_file.quotes.prompt_text(),
        };
        self.modal = Some(ModalType::Prompt {
            target,
            question,
            input: String::new(),
        });
    }

    fn dispatch(&mut self, action: Action) {
        match self.case_file.dispatch(action) {
            Ok(Effect::None) => {}
            Ok(Effect::Notice(notice)) => self.modal = Some(ModalType::Notice(notice)),
            Ok(Effect::Download(download)) => {
                self.status = match platform::offer_download(&download) {
                    Ok(Some(target)) => format!("Exported {}", target),
                    Ok(None) => "Export cancelled".to_string(),
                    Err(e) => format!("Export failed: {}", e),
                };
            }
            Err(e) => {
                log::error!("{}", e);
                self.status = format!("Error: {}", e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(),
            ui::toolbar::view_nav(&self.case_file.navigator),
            rule::horizontal(1),
            ui::view_active_panel(self),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.store_label, &self.status),
        ]
        .spacing(6)
        .padding(12);

        let base = container(content).width(Length::Fill).height(Length::Fill);

        match &self.modal {
            Some(modal_type) => stack![base, ui::modal::view_backdrop(modal_type), ui::modal::view_modal(modal_type)].into(),
            None => base.into(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(App::new, App::update, App::view)
        .title("Case File")
        .window_size((960.0, 680.0))
        .run()
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title("Case File")
        .run()
}
