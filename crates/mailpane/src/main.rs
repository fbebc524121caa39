//! Mailpane - desktop email client front end.
//!
//! Built with Rust and the iced GUI framework. The mailbox state lives in a
//! single `mailpane_core::Store` owned here at the composition root and
//! handed to views by parameter; all mutation goes through dispatched
//! actions.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, Task};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailpane_core::{Action, AppState, CancelToken, Email, EmailId, EmailPatch, Store, controller};

use message::Message;
use model::{AppSettings, ItemState};
use style::palette::{self, ThemeMode};
use style::{banner_style, content_style, ghost_button_style, primary_button_style};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailpane=debug,mailpane_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mailpane");

    iced::application(Mailpane::new, Mailpane::update, Mailpane::view)
        .title("Mailpane")
        .run()
}

/// Main application state.
struct Mailpane {
    /// The single store instance; every state change is a dispatched action.
    store: Store,
    /// Visual state per rendered list row, keyed by email id. Entries live
    /// exactly as long as their row: removal of the backing email drops the
    /// entry, a list refresh keeps entries for surviving ids.
    items: HashMap<EmailId, ItemState>,
    /// Cancellation token of the in-flight list fetch.
    list_fetch: Option<CancelToken>,
    /// Cancellation token of the in-flight detail fetch.
    detail_fetch: Option<CancelToken>,
    /// Error banner to display.
    error_message: Option<String>,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl Mailpane {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self {
            store: Store::new(AppState::new()),
            items: HashMap::new(),
            list_fetch: None,
            detail_fetch: None,
            error_message: None,
            theme_mode: ThemeMode::Light,
        };
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.theme_mode);
    }

    /// Dispatches an action, surfacing a rejection loudly instead of
    /// applying a best-guess state.
    fn apply(&mut self, action: Action) {
        if let Err(err) = self.store.dispatch(action) {
            tracing::error!(%err, "store rejected action");
            self.error_message = Some(format!("Internal error: {err}"));
        }
    }

    /// Drops item state whose backing email is gone from the list.
    fn sync_items(&mut self) {
        let ids: HashSet<EmailId> = self.store.state().emails.iter().map(|e| e.id).collect();
        self.items.retain(|id, _| ids.contains(id));
    }

    /// Visual state of one row, created on first touch.
    fn item_mut(&mut self, id: EmailId) -> &mut ItemState {
        self.items.entry(id).or_insert_with(ItemState::new)
    }

    /// Starts a list fetch, replacing (and cancelling) any previous one.
    fn start_list_fetch(&mut self) -> Task<Message> {
        if let Some(stale) = self.list_fetch.take() {
            stale.cancel();
        }
        let token = CancelToken::new();
        self.list_fetch = Some(token.clone());

        if let Err(err) = controller::begin_list_fetch(&mut self.store) {
            tracing::error!(%err, "store rejected list fetch start");
            return Task::none();
        }

        Task::perform(
            async move { (token, fetch_emails().await) },
            |(token, outcome)| Message::EmailsLoaded(token, outcome),
        )
    }

    /// Starts a detail fetch, replacing (and cancelling) any previous one.
    fn start_detail_fetch(&mut self, id: EmailId) -> Task<Message> {
        if let Some(stale) = self.detail_fetch.take() {
            stale.cancel();
        }
        let token = CancelToken::new();
        self.detail_fetch = Some(token.clone());

        if let Err(err) = controller::begin_detail_fetch(&mut self.store) {
            tracing::error!(%err, "store rejected detail fetch start");
            return Task::none();
        }

        Task::perform(
            async move { (token, fetch_email(id).await) },
            |(token, outcome)| Message::EmailLoaded(token, outcome),
        )
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SignIn => {
                self.apply(Action::SetLoggedIn(true));
                return self.start_list_fetch();
            }
            Message::SignOut => {
                // Completions of in-flight fetches are irrelevant now.
                if let Some(token) = self.list_fetch.take() {
                    token.cancel();
                }
                if let Some(token) = self.detail_fetch.take() {
                    token.cancel();
                }
                if let Err(err) = controller::sign_out(&mut self.store) {
                    tracing::error!(%err, "store rejected sign-out");
                }
                info!("Signed out");
            }
            Message::RefreshEmails => {
                return self.start_list_fetch();
            }
            Message::EmailsLoaded(token, outcome) => {
                if self.list_fetch.as_ref() == Some(&token) {
                    self.list_fetch = None;
                }
                match controller::finish_list_fetch(&mut self.store, &token, outcome) {
                    Ok(Some(failure)) => self.error_message = Some(failure),
                    Ok(None) => {}
                    Err(err) => {
                        tracing::error!(%err, "store rejected list fetch completion");
                    }
                }
                self.sync_items();
            }
            Message::SelectEmail(id) => {
                return self.start_detail_fetch(id);
            }
            Message::EmailLoaded(token, outcome) => {
                if self.detail_fetch.as_ref() == Some(&token) {
                    self.detail_fetch = None;
                }
                match controller::finish_detail_fetch(&mut self.store, &token, outcome) {
                    Ok(Some(failure)) => self.error_message = Some(failure),
                    Ok(None) => {}
                    Err(err) => {
                        tracing::error!(%err, "store rejected detail fetch completion");
                    }
                }
            }
            Message::ClearSelection => {
                self.apply(Action::SetSelectedEmail(None));
            }
            Message::ItemEntered(id) => {
                self.item_mut(id).pointer_entered();
            }
            Message::ItemExited(id) => {
                self.item_mut(id).pointer_left();
            }
            Message::ToggleBody(id) => {
                self.item_mut(id).toggle_body();
            }
            Message::DeleteEmail(id) => {
                self.item_mut(id).begin_action();
                return Task::perform(delete_email(id), move |outcome| {
                    Message::EmailDeleted(id, outcome)
                });
            }
            Message::EmailDeleted(id, outcome) => match outcome {
                Ok(()) => {
                    self.apply(Action::RemoveEmail(id));
                    // The row unmounts with its entry; selection is left
                    // as-is even when it pointed at the removed email.
                    self.items.remove(&id);
                }
                Err(failure) => {
                    self.item_mut(id).finish_action();
                    self.error_message = Some(failure);
                }
            },
            Message::MarkRead(id) => {
                self.item_mut(id).begin_action();
                return Task::perform(mark_read(id), move |outcome| {
                    Message::EmailMarkedRead(id, outcome)
                });
            }
            Message::EmailMarkedRead(id, outcome) => {
                self.item_mut(id).finish_action();
                match outcome {
                    Ok(()) => self.apply(Action::UpdateEmail {
                        id,
                        patch: EmailPatch::read(),
                    }),
                    Err(failure) => self.error_message = Some(failure),
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = match self.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                self.apply_theme();
                info!("Theme changed to {:?}", self.theme_mode);
                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(save_settings(settings), Message::SettingsSaved);
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                }
                Err(e) => {
                    info!("Failed to load settings, using defaults: {}", e);
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    self.error_message = Some(format!("Failed to save settings: {e}"));
                }
            }
            Message::DismissError => {
                self.error_message = None;
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let state = self.store.state();
        let header = view::view_header(state.is_logged_in, self.theme_mode);

        let content: Element<'_, Message> = if state.is_logged_in {
            row![
                view::view_email_list(
                    &state.emails,
                    state.selected_id(),
                    &self.items,
                    state.loading_emails,
                ),
                view::view_email_detail(state.selected_email.as_ref(), state.loading_email),
            ]
            .height(Length::Fill)
            .into()
        } else {
            view_signed_out()
        };

        let mut page = column![header];
        if let Some(failure) = &self.error_message {
            page = page.push(view_error_banner(failure));
        }

        page.push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Landing pane shown while signed out.
fn view_signed_out() -> Element<'static, Message> {
    container(
        column![
            text("\u{1F4EC}").size(64),
            text("Welcome to Mailpane").size(22).font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            }),
            text("Sign in to load your inbox").size(14).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
            button(text("Sign in").size(14))
                .padding([10, 24])
                .style(primary_button_style)
                .on_press(Message::SignIn),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(content_style)
    .into()
}

/// Renders the dismissible error banner.
fn view_error_banner(failure: &str) -> Element<'static, Message> {
    container(
        row![
            text(failure.to_string()).size(13).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.accent_red),
                }
            }),
            Space::new().width(Length::Fill),
            button(text("\u{2715}").size(12))
                .padding([2, 8])
                .style(ghost_button_style)
                .on_press(Message::DismissError),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .padding([8, 12]),
    )
    .width(Length::Fill)
    .style(banner_style)
    .into()
}

/// Simulated latency of the demo gateway.
const GATEWAY_LATENCY: Duration = Duration::from_millis(450);

/// Fetches the mailbox from the demo gateway.
async fn fetch_emails() -> Result<Vec<Email>, String> {
    tokio::time::sleep(GATEWAY_LATENCY).await;
    let emails = Email::sample_inbox();
    info!("Loaded {} emails", emails.len());
    Ok(emails)
}

/// Fetches one email's detail from the demo gateway.
async fn fetch_email(id: EmailId) -> Result<Email, String> {
    tokio::time::sleep(GATEWAY_LATENCY).await;
    Email::sample_inbox()
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| format!("Email {id} not found"))
}

/// Deletes an email on the demo gateway.
async fn delete_email(id: EmailId) -> Result<(), String> {
    tokio::time::sleep(GATEWAY_LATENCY).await;
    info!("Deleted email {id}");
    Ok(())
}

/// Marks an email read on the demo gateway.
async fn mark_read(id: EmailId) -> Result<(), String> {
    tokio::time::sleep(Duration::from_millis(250)).await;
    info!("Marked email {id} read");
    Ok(())
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mailpane")
        .join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mailpane");

    tokio::fs::create_dir_all(&config_dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = config_dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("Settings saved to {:?}", settings_path);
    Ok(())
}
