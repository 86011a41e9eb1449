//! # UQ Workflow GUI Application
//!
//! Desktop front end for configuring an uncertainty-quantification workflow.
//! Built with Iced. The window is a single vertical stack:
//!
//! ```text
//! header
//! File toolbar (New, Open, Save, Save As, Quit)
//! random variables | FEM | EDPs | sampling method   (scrollable)
//! footer
//! status bar
//! ```
//!
//! All state lives in [`uq_core::session::Session`]; this crate only draws it
//! and routes messages.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod dialogs;
mod forms;
mod ui;

use iced::widget::{column, container, rule, scrollable};
use iced::{keyboard, Element, Length, Size, Subscription, Task, Theme};
use log::{info, warn};

use uq_core::panels::{DistributionKind, FemProgram, SamplingMethod};
use uq_core::session::{Command, CommandOutcome, Session};
use uq_core::settings::Settings;

use dialogs::NativeHost;
use forms::{parse_f64, FormDrafts};

const APP_NAME: &str = "UQ Workflow";

pub fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let window_size = Size::new(settings.window_width, settings.window_height);
    info!("starting {} {}", APP_NAME, env!("CARGO_PKG_VERSION"));

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(window_size)
        .run()
}

/// Application state
pub struct App {
    pub session: Session,
    pub drafts: FormDrafts,
    pub settings: Settings,
    pub status: String,
}

/// Every user interaction the window can produce
#[derive(Debug, Clone)]
pub enum Message {
    // File menu
    Command(Command),
    ToggleDarkMode,

    // Random variables
    AddRandomVariable,
    RemoveRandomVariable(usize),
    RvNameChanged(usize, String),
    RvKindSelected(usize, DistributionKind),
    RvParamChanged(usize, usize, String),

    // FEM
    FemProgramSelected(FemProgram),
    FemMainInputChanged(String),
    FemPostprocessChanged(String),
    BrowseMainInput,
    BrowsePostprocess,

    // EDPs
    AddEdp,
    RemoveEdp(usize),
    EdpNameChanged(usize, String),

    // Sampling method
    SamplingMethodSelected(SamplingMethod),
    SamplesChanged(String),
    SeedChanged(String),
}

impl App {
    fn new(settings: Settings) -> Self {
        let session = Session::with_restore_scope(settings.restore_scope());
        let drafts = FormDrafts::from_panels(session.panels());
        App {
            session,
            drafts,
            settings,
            status: "Ready".to_string(),
        }
    }

    fn host(&self) -> NativeHost {
        NativeHost::new(
            self.session.current_file(),
            self.settings.default_open_dir.as_deref(),
        )
    }

    fn title(&self) -> String {
        let modified = if self.session.is_modified() { "*" } else { "" };
        format!("{}{} - {}", self.session.window_file_path(), modified, APP_NAME)
    }

    fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => return self.run_command(command),
            Message::ToggleDarkMode => {
                self.settings.dark_mode = !self.settings.dark_mode;
                if let Some(path) = Settings::default_path() {
                    if let Err(e) = self.settings.save_to(&path) {
                        warn!("settings not saved: {}", e);
                    }
                }
            }

            Message::AddRandomVariable => {
                let rvs = &mut self.session.panels_mut().random_variables;
                let index = rvs.add_default();
                if let Some(variable) = rvs.get(index) {
                    self.drafts.refresh_rv(index, variable);
                }
            }
            Message::RemoveRandomVariable(index) => {
                self.session.panels_mut().random_variables.remove(index);
                self.drafts.remove_rv(index);
            }
            Message::RvNameChanged(index, name) => {
                let result = self
                    .session
                    .edit(|panels| panels.random_variables.set_name(index, name));
                if let Err(e) = result {
                    warn!("random variable not renamed: {}", e);
                }
            }
            Message::RvKindSelected(index, kind) => {
                let result = self
                    .session
                    .edit(|panels| panels.random_variables.set_distribution_kind(index, kind));
                match result {
                    Ok(()) => {
                        if let Some(variable) = self.session.panels().random_variables.get(index) {
                            self.drafts.refresh_rv(index, variable);
                        }
                    }
                    Err(e) => warn!("distribution not changed: {}", e),
                }
            }
            Message::RvParamChanged(index, parameter, text) => {
                if let Some(value) = parse_f64(&text) {
                    let result = self.session.edit(|panels| {
                        panels.random_variables.set_parameter(index, parameter, value)
                    });
                    if let Err(e) = result {
                        warn!("parameter not set: {}", e);
                    }
                }
                self.drafts.set_rv_param(index, parameter, text);
            }

            Message::FemProgramSelected(program) => self.session.panels_mut().fem.set_program(program),
            Message::FemMainInputChanged(path) => self.session.panels_mut().fem.set_main_input(path),
            Message::FemPostprocessChanged(path) => {
                self.session.panels_mut().fem.set_postprocess_script(path)
            }
            Message::BrowseMainInput => {
                if let Some(path) = self.host().pick_any_file("Select Main Input File") {
                    self.session
                        .panels_mut()
                        .fem
                        .set_main_input(path.display().to_string());
                }
            }
            Message::BrowsePostprocess => {
                if let Some(path) = self.host().pick_any_file("Select Post-processing Script") {
                    self.session
                        .panels_mut()
                        .fem
                        .set_postprocess_script(path.display().to_string());
                }
            }

            Message::AddEdp => {
                self.session.panels_mut().edps.add_default();
            }
            Message::RemoveEdp(index) => {
                self.session.panels_mut().edps.remove(index);
            }
            Message::EdpNameChanged(index, name) => {
                if let Err(e) = self.session.edit(|panels| panels.edps.rename(index, name)) {
                    warn!("EDP not renamed: {}", e);
                }
            }

            Message::SamplingMethodSelected(method) => {
                self.session.panels_mut().sampling.set_method(method)
            }
            Message::SamplesChanged(text) => {
                if let Ok(samples) = text.trim().parse::<u32>() {
                    self.session.panels_mut().sampling.set_samples(samples);
                }
                self.drafts.samples = text;
            }
            Message::SeedChanged(text) => {
                if let Ok(seed) = text.trim().parse::<u64>() {
                    self.session.panels_mut().sampling.set_seed(seed);
                }
                self.drafts.seed = text;
            }
        }
        Task::none()
    }

    fn run_command(&mut self, command: Command) -> Task<Message> {
        let mut host = self.host();
        let outcome = self.session.dispatch(command, &mut host);

        match (command, outcome) {
            (_, CommandOutcome::Quit) => return iced::exit(),
            (_, CommandOutcome::Cancelled) => self.status = "Cancelled".to_string(),
            (_, CommandOutcome::Failed) => self.status = format!("{} failed", command.label()),
            (Command::New, CommandOutcome::Done) => {
                self.drafts = FormDrafts::from_panels(self.session.panels());
                self.status = "New document".to_string();
            }
            (Command::Open, CommandOutcome::Done) => {
                self.drafts = FormDrafts::from_panels(self.session.panels());
                self.status = match self.session.last_load().and_then(|r| r.parse_warning.as_ref()) {
                    Some(warning) => format!("Opened with problems: {}", warning),
                    None => format!("Opened {}", self.session.window_file_path()),
                };
            }
            (_, CommandOutcome::Done) => {
                self.status = format!(
                    "Saved {} at {}",
                    self.session.window_file_path(),
                    chrono::Local::now().format("%H:%M:%S")
                );
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| {
            let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
                return None;
            };
            if !modifiers.command() {
                return None;
            }
            let keyboard::Key::Character(c) = key else {
                return None;
            };
            let command = match c.as_str().to_ascii_lowercase().as_str() {
                "n" => Command::New,
                "o" => Command::Open,
                "s" if modifiers.shift() => Command::SaveAs,
                "s" => Command::Save,
                "q" => Command::Quit,
                _ => return None,
            };
            Some(Message::Command(command))
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = self.session.panels();

        let body = column![
            ui::input_random_variables::view(&panels.random_variables, &self.drafts),
            rule::horizontal(1),
            ui::input_fem::view(&panels.fem),
            rule::horizontal(1),
            ui::input_edp::view(&panels.edps),
            rule::horizontal(1),
            ui::input_sampling::view(&panels.sampling, &self.drafts),
        ]
        .spacing(12)
        .padding(8);

        let content = column![
            ui::header::view_header(ui::header::HEADING),
            ui::toolbar::view_toolbar(self.settings.dark_mode),
            container(scrollable(body))
                .height(Length::Fill)
                .style(container::bordered_box)
                .padding(5),
            ui::footer::view_footer(),
            ui::status_bar::view_status_bar(
                self.session.window_file_path(),
                self.session.is_modified(),
                &self.status,
            ),
        ]
        .spacing(6);

        container(content).padding(10).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uq_core::panels::Distribution;

    fn app() -> App {
        App::new(Settings::default())
    }

    #[test]
    fn test_fresh_window_title() {
        assert_eq!(app().title(), "untitled.json - UQ Workflow");
    }

    #[test]
    fn test_param_edit_commits_only_valid_numbers() {
        let mut app = app();
        let _ = app.update(Message::AddRandomVariable);
        let _ = app.update(Message::RvParamChanged(0, 1, "2.5".to_string()));
        let _ = app.update(Message::RvParamChanged(0, 0, "1.2.3".to_string()));

        let variable = app.session.panels().random_variables.get(0).unwrap();
        assert_eq!(variable.distribution, Distribution::Normal { mean: 0.0, std_dev: 2.5 });
        assert_eq!(app.drafts.rv_param(0, 0), "1.2.3");
        assert!(app.title().contains('*'));
    }

    #[test]
    fn test_kind_change_resets_drafts() {
        let mut app = app();
        let _ = app.update(Message::AddRandomVariable);
        let _ = app.update(Message::RvKindSelected(0, DistributionKind::Weibull));
        assert_eq!(app.drafts.rv_params[0], vec!["1".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_new_command_resets_panels_and_drafts() {
        let mut app = app();
        let _ = app.update(Message::AddEdp);
        let _ = app.update(Message::SamplesChanged("25".to_string()));
        assert_eq!(app.session.panels().sampling.samples, 25);

        let _ = app.update(Message::Command(Command::New));
        assert!(app.session.panels().edps.is_empty());
        assert_eq!(app.drafts.samples, "1000");
        assert_eq!(app.status, "New document");
    }

    #[test]
    fn test_edit_of_missing_row_leaves_title_clean() {
        let mut app = app();
        let _ = app.update(Message::EdpNameChanged(4, "Drift".to_string()));
        let _ = app.update(Message::RvNameChanged(2, "fy".to_string()));
        assert!(!app.session.is_modified());
        assert!(!app.title().contains('*'));
    }

    #[test]
    fn test_bad_seed_text_keeps_previous_seed() {
        let mut app = app();
        let _ = app.update(Message::SeedChanged("-3".to_string()));
        assert_eq!(app.session.panels().sampling.seed, 1);
        assert_eq!(app.drafts.seed, "-3");
    }
}
