use std::{path::PathBuf, sync::Arc};

use derive_more::{Deref, DerefMut};
use iced::{
    Color, Element,
    Length::{self, Fill, FillPortion},
    Task, Theme, application,
    widget::{button, center, column, container, mouse_area, opaque, row, scrollable, stack, text},
};
use pawsome_lib::{
    CurrentUser, Decision, MatchSession, Seed,
    config::{Cfg as CoreCfg, CoreConfig},
};
use parking_lot::RwLock;
use rfd::AsyncFileDialog;
use tokio::task::spawn_blocking;
use tracing::{Level, debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        match_list, match_posts, nav_bar,
        playdate_dialog::{self, PlaydateDialog},
        playdate_list, profile_card,
    },
    config::{Cfg, GuiConfig},
    icons::icon,
};

pub mod components;
pub mod config;
pub mod icons;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    NavBar(nav_bar::Message),
    Decided(Decision),
    HostPlaydatePressed,
    SeedPicked(Option<PathBuf>),
    SeedLoaded(Result<Seed, String>),
    // Components
    PlaydateDialog(playdate_dialog::Message),
}

struct App {
    title: String,
    cfg: Cfg,
    core_cfg: CoreCfg,
    session: MatchSession,
    /// Last problem worth telling the user about
    status: Option<String>,
    // Components
    playdate_dialog: PlaydateDialogState,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");

        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let core_cfg = CoreConfig::load()
            .unwrap_or_else(|err| {
                error!("Using the default core config: {err}");
                CoreConfig::default()
            })
            .into_handle();

        let mut status = None;
        let session = {
            let core = core_cfg.read();
            MatchSession::from_config(&core).unwrap_or_else(|err| {
                error!("Falling back to the built-in seed: {err}");
                status = Some(format!("Couldn't load seed: {err}"));
                builtin_session(&core.current_user)
            })
        };

        (
            Self {
                title: "Pawsome Playdates".into(),
                cfg,
                core_cfg,
                session,
                status,
                playdate_dialog: PlaydateDialogState {
                    dialog: PlaydateDialog::new(),
                    visible: false,
                },
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavBar(nav_bar::Message::OpenSeedPressed) => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .set_title("Open seed")
                        .add_filter("Seed", &["toml"])
                        .pick_file()
                        .await
                        .map(|file_handle| file_handle.path().to_path_buf())
                },
                Message::SeedPicked,
            ),
            Message::NavBar(nav_bar::Message::ThemeTogglePressed) => {
                let mut cfg = self.cfg.write();
                cfg.theme = cfg.theme.toggled();
                debug!("Switched to the {} theme", cfg.theme);

                if let Err(err) = cfg.save() {
                    error!("Failed to save the GUI config: {err}");
                }
                Task::none()
            }
            Message::Decided(decision) => {
                self.session.decide(decision.liked());
                Task::none()
            }
            Message::HostPlaydatePressed => {
                self.playdate_dialog.visible = true;
                Task::none()
            }
            Message::SeedPicked(path) => match path {
                Some(path) => Task::perform(
                    async move {
                        match spawn_blocking(move || Seed::load(&path)).await {
                            Ok(result) => result.map_err(|err| err.to_string()),
                            Err(err) => Err(err.to_string()),
                        }
                    },
                    Message::SeedLoaded,
                ),
                None => Task::none(),
            },
            Message::SeedLoaded(result) => {
                let current_user = self.core_cfg.read().current_user.clone();

                match result.and_then(|seed| {
                    MatchSession::new(seed, current_user).map_err(|err| err.to_string())
                }) {
                    Ok(session) => {
                        info!("Started a new session from the picked seed");
                        self.session = session;
                        self.status = None;
                    }
                    Err(err) => {
                        error!("Couldn't load seed: {err}");
                        self.status = Some(format!("Couldn't load seed: {err}"));
                    }
                }
                Task::none()
            }
            Message::PlaydateDialog(message) => match self.playdate_dialog.update(message) {
                playdate_dialog::Action::None => Task::none(),
                playdate_dialog::Action::Cancel => {
                    self.playdate_dialog.visible = false;
                    Task::none()
                }
                playdate_dialog::Action::Create(new_playdate) => {
                    self.session.create_playdate(new_playdate);
                    self.playdate_dialog.visible = false;
                    Task::none()
                }
            },
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let card = self
            .session
            .current_profile()
            .map(|profile| profile_card::view(profile).map(Message::Decided));

        let content = column![
            nav_bar::view(self.cfg.read().theme, self.status.as_deref()).map(Message::NavBar),
            scrollable(
                row![
                    column![card, match_posts::view(&self.session)]
                        .spacing(16)
                        .width(FillPortion(2)),
                    column![
                        match_list::view(self.session.matches()),
                        playdate_list::view(self.session.playdates()),
                        button(row![icon("plus"), text("Host a Playdate")].spacing(6))
                            .on_press(Message::HostPlaydatePressed),
                    ]
                    .spacing(16)
                    .width(FillPortion(1)),
                ]
                .spacing(16)
                .padding(16)
            ),
        ]
        .height(Fill);

        if self.playdate_dialog.visible {
            modal(
                content,
                self.playdate_dialog.view().map(Message::PlaydateDialog),
                Some(Message::PlaydateDialog(
                    playdate_dialog::Message::CancelPressed,
                )),
            )
        } else {
            content.into()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.cfg.read().theme()
    }
}

fn builtin_session(current_user: &CurrentUser) -> MatchSession {
    let seed = Seed::builtin().expect("the built-in seed must parse");
    MatchSession::new(seed, current_user.clone()).expect("the built-in seed must have profiles")
}

#[derive(Debug, Deref, DerefMut)]
struct PlaydateDialogState {
    #[deref]
    #[deref_mut]
    dialog: PlaydateDialog,
    visible: bool,
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
