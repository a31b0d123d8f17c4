//! Main application state and logic.
//!
//! Two screens: the join screen (pick a room) and the editor session
//! (one room, one live channel). The editor owns its channel through an
//! iced subscription keyed on the room identifier — leaving the room
//! drops the subscription, which closes the socket and ends its tasks.

use iced::widget::{
    button, column, container, horizontal_space, mouse_area, pick_list, row, scrollable, stack,
    text, text_editor, text_input, Space,
};
use iced::{Background, Border, Element, Font, Length, Padding, Subscription, Task};
use std::sync::Arc;

use coderoom_channel::{ChannelEndpoint, ChannelEvent, Connection, RoomChannel};
use coderoom_core::{
    Config, Language, RemoteUpdate, RoomId, Session, SessionIdentity, ThemePreset,
};
use coderoom_remote::{BackendClient, CodeRequest};
use coderoom_syntax::{Ruleset, RulesetRegistry};

use crate::highlighter::{EditorHighlighter, HighlightSettings};
use crate::style::ChromeStyle;
use crate::theme::Theme;

/// Placeholder for the output panel before the first run.
const OUTPUT_PLACEHOLDER: &str = "Click ▶ Run to see output here.";

// ============================================================================
// Application State
// ============================================================================

/// Launch parameters resolved by the binary.
#[derive(Debug, Default)]
pub struct Flags {
    pub config: Config,
    pub identity: SessionIdentity,
    /// Jump straight into this room instead of showing the join screen.
    pub room: Option<RoomId>,
}

pub struct App {
    config: Config,
    identity: SessionIdentity,
    rulesets: RulesetRegistry,
    screen: Screen,
}

enum Screen {
    Join(JoinScreen),
    Editor(Box<EditorScreen>),
}

#[derive(Default)]
struct JoinScreen {
    room_input: String,
}

/// Connection as seen from the UI: the guarded send handle exists only
/// while the channel is open.
enum RoomConnection {
    Connecting,
    Open(Connection),
    Closed,
}

impl RoomConnection {
    fn label(&self) -> &'static str {
        match self {
            RoomConnection::Connecting => "connecting",
            RoomConnection::Open(_) => "open",
            RoomConnection::Closed => "closed",
        }
    }
}

struct EditorScreen {
    room: RoomId,
    session: Session,
    content: text_editor::Content,
    connection: RoomConnection,
    rules: Arc<Ruleset>,
    output: String,
    suggestion: Option<String>,
    run_task: Option<iced::task::Handle>,
    debug_task: Option<iced::task::Handle>,
    style: ChromeStyle,
}

impl EditorScreen {
    fn new(room: RoomId, mut session: Session, rules: Arc<Ruleset>) -> Self {
        let content = text_editor::Content::with_text(session.text());
        // Align the session with the widget's line-based representation
        // so later equality checks compare like with like. Nothing is
        // connected yet, so the produced update is dropped.
        let _ = session.edit_local(content.text());

        Self {
            room,
            session,
            content,
            connection: RoomConnection::Connecting,
            rules,
            output: String::new(),
            suggestion: None,
            run_task: None,
            debug_task: None,
            style: ChromeStyle::default(),
        }
    }

    /// Broadcasts a local update if the channel is open; otherwise the
    /// edit stays local.
    fn broadcast(&self, update: RemoteUpdate) {
        if let RoomConnection::Open(connection) = &self.connection {
            connection.send(update);
        }
    }

    /// Applies an inbound envelope, replacing the widget content only
    /// when the text actually changed.
    fn apply_remote(&mut self, update: RemoteUpdate) {
        // Normalize through the widget so the full-string compare sees
        // the same line representation on both sides.
        let content = text_editor::Content::with_text(&update.content);
        let update = RemoteUpdate {
            author: update.author,
            content: content.text(),
        };
        if self.session.apply_remote(update) {
            self.content = content;
        }
    }

    /// Aborts in-flight backend tasks; their results are abandoned.
    fn abandon_tasks(&mut self) {
        if let Some(handle) = self.run_task.take() {
            handle.abort();
        }
        if let Some(handle) = self.debug_task.take() {
            handle.abort();
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    // Join screen
    RoomInputChanged(String),
    JoinRoom,

    // Editor
    EditorAction(text_editor::Action),
    LanguageSelected(Language),
    ToggleTheme,
    RunCode,
    AiDebug,
    LeaveRoom,

    // Channel lifecycle
    Channel(ChannelUpdate),

    // Async results
    RunFinished(String),
    DebugFinished(String),
    DismissSuggestion,
}

/// Channel lifecycle as delivered to the UI.
#[derive(Debug, Clone)]
pub enum ChannelUpdate {
    Opened(Connection),
    Received(RemoteUpdate),
    Closed,
}

// ============================================================================
// Update Logic
// ============================================================================

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = Self {
            config: flags.config,
            identity: flags.identity,
            rulesets: RulesetRegistry::new(),
            screen: Screen::Join(JoinScreen::default()),
        };

        if let Some(room) = flags.room {
            app.open_room(room);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::Join(_) => "Coderoom".to_string(),
            Screen::Editor(editor) => format!("{} - Coderoom", editor.room),
        }
    }

    fn theme(&self) -> iced::Theme {
        match self.active_preset() {
            ThemePreset::Dark => iced::Theme::Dark,
            ThemePreset::Light => iced::Theme::Light,
        }
    }

    fn active_preset(&self) -> ThemePreset {
        match &self.screen {
            Screen::Join(_) => self.config.editor.theme,
            Screen::Editor(editor) => editor.session.theme(),
        }
    }

    fn open_room(&mut self, room: RoomId) {
        let session = Session::with_defaults(
            self.identity.clone(),
            self.config.editor.language,
            self.config.editor.theme,
        );
        let rules = self.rulesets.register(session.language().id());
        tracing::info!(room = %room, user = %self.identity, "joining room");
        self.screen = Screen::Editor(Box::new(EditorScreen::new(room, session, rules)));
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RoomInputChanged(value) => {
                if let Screen::Join(join) = &mut self.screen {
                    join.room_input = value;
                }
            }

            Message::JoinRoom => {
                // Whitespace-only input is silently rejected.
                let room = match &self.screen {
                    Screen::Join(join) => RoomId::parse(&join.room_input),
                    Screen::Editor(_) => None,
                };
                if let Some(room) = room {
                    self.open_room(room);
                }
            }

            Message::EditorAction(action) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.content.perform(action);
                    if let Some(update) = editor.session.edit_local(editor.content.text()) {
                        editor.broadcast(update);
                    }
                }
            }

            Message::Channel(ChannelUpdate::Opened(connection)) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.connection = RoomConnection::Open(connection);
                }
            }

            Message::Channel(ChannelUpdate::Received(update)) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.apply_remote(update);
                }
            }

            Message::Channel(ChannelUpdate::Closed) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.connection = RoomConnection::Closed;
                }
            }

            Message::LanguageSelected(language) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.session.set_language(language);
                    editor.rules = self.rulesets.register(language.id());
                }
            }

            Message::ToggleTheme => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.session.toggle_theme();
                }
            }

            Message::RunCode => {
                if let Screen::Editor(editor) = &mut self.screen {
                    let client = BackendClient::new(self.config.server.http_base.clone());
                    let request =
                        CodeRequest::new(editor.session.language(), editor.session.text());
                    let (task, handle) = Task::perform(
                        async move {
                            match client.run(&request).await {
                                Ok(response) => response.panel_text(),
                                Err(err) => format!("Server error: {err}"),
                            }
                        },
                        Message::RunFinished,
                    )
                    .abortable();
                    editor.run_task = Some(handle);
                    return task;
                }
            }

            Message::RunFinished(output) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.run_task = None;
                    editor.output = output;
                }
            }

            Message::AiDebug => {
                if let Screen::Editor(editor) = &mut self.screen {
                    let client = BackendClient::new(self.config.server.http_base.clone());
                    let request =
                        CodeRequest::new(editor.session.language(), editor.session.text());
                    let (task, handle) = Task::perform(
                        async move {
                            match client.debug(&request).await {
                                Ok(response) => response.suggestion,
                                Err(err) => format!("AI Debug failed: {err}"),
                            }
                        },
                        Message::DebugFinished,
                    )
                    .abortable();
                    editor.debug_task = Some(handle);
                    return task;
                }
            }

            Message::DebugFinished(suggestion) => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.debug_task = None;
                    editor.suggestion = Some(suggestion);
                }
            }

            Message::DismissSuggestion => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.suggestion = None;
                }
            }

            Message::LeaveRoom => {
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.abandon_tasks();
                    let room = editor.room.clone();
                    tracing::info!(room = %room, "leaving room");
                    self.screen = Screen::Join(JoinScreen {
                        room_input: room.as_str().to_string(),
                    });
                }
            }
        }

        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Join(_) => Subscription::none(),
            Screen::Editor(editor) => {
                let endpoint = ChannelEndpoint::new(
                    self.config.server.ws_base.clone(),
                    editor.room.clone(),
                );
                Subscription::run_with_id(
                    format!("room-channel-{}", editor.room),
                    room_channel_stream(endpoint),
                )
                .map(Message::Channel)
            }
        }
    }
}

/// Drives one room channel for as long as the editor session is mounted.
///
/// The subscription owns the channel: when the editor screen goes away,
/// iced drops this stream, the channel and its send handles drop with
/// it, and the socket closes.
fn room_channel_stream(
    endpoint: ChannelEndpoint,
) -> impl iced::futures::Stream<Item = ChannelUpdate> {
    iced::stream::channel(64, move |mut output| async move {
        use iced::futures::SinkExt;

        match RoomChannel::connect(&endpoint).await {
            Ok(mut channel) => {
                let _ = output
                    .send(ChannelUpdate::Opened(channel.connection()))
                    .await;
                while let Some(event) = channel.next_event().await {
                    match event {
                        ChannelEvent::Received(update) => {
                            if output.send(ChannelUpdate::Received(update)).await.is_err() {
                                return;
                            }
                        }
                        ChannelEvent::Closed => {
                            let _ = output.send(ChannelUpdate::Closed).await;
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                tracing::warn!(%err, "room channel could not be established");
                let _ = output.send(ChannelUpdate::Closed).await;
            }
        }

        // The channel is gone; park until the session unmounts.
        iced::futures::future::pending::<()>().await;
    })
}

// ============================================================================
// Views
// ============================================================================

impl App {
    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Join(join) => self.view_join(join),
            Screen::Editor(editor) => self.view_editor(editor),
        }
    }

    fn view_join<'a>(&'a self, join: &'a JoinScreen) -> Element<'a, Message> {
        let palette = Theme::preset(self.config.editor.theme);
        let bg = palette.background.primary.to_iced();
        let fg = palette.foreground.primary.to_iced();
        let accent = palette.foreground.accent.to_iced();

        let form = column![
            text("Join a Code Room").size(24).color(fg),
            text_input("Enter Room ID", &join.room_input)
                .on_input(Message::RoomInputChanged)
                .on_submit(Message::JoinRoom)
                .padding(10)
                .width(320),
            button(text("Join Room").size(14))
                .padding(Padding::from([8, 20]))
                .style(move |_, status| filled_button(accent, status))
                .on_press(Message::JoinRoom),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center);

        container(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(bg)),
                ..Default::default()
            })
            .into()
    }

    fn view_editor<'a>(&'a self, editor: &'a EditorScreen) -> Element<'a, Message> {
        let palette = Theme::preset(editor.session.theme());
        let bg = palette.background.primary.to_iced();

        let content = column![
            self.view_toolbar(editor, &palette),
            self.view_surface(editor, &palette),
            self.view_output_panel(editor, &palette),
            self.view_status_bar(editor, &palette),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(bg)),
                ..Default::default()
            })
            .into();

        if editor.suggestion.is_some() {
            stack![
                main_view,
                // Dim overlay
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(iced::Color::from_rgba(
                                0.0, 0.0, 0.0, 0.5
                            ))),
                            ..Default::default()
                        })
                )
                .on_press(Message::DismissSuggestion),
                self.view_suggestion_modal(editor, &palette),
            ]
            .into()
        } else {
            main_view
        }
    }

    fn view_toolbar<'a>(&'a self, editor: &'a EditorScreen, palette: &Theme) -> Element<'a, Message> {
        let secondary_bg = palette.background.secondary.to_iced();
        let border = palette.ui.border.to_iced();
        let fg = palette.foreground.primary.to_iced();
        let muted = palette.foreground.secondary.to_iced();
        let button_bg = palette.background.tertiary.to_iced();
        let run_color = palette.ui.run_button.to_iced();
        let assist_color = palette.ui.assist_button.to_iced();

        let theme_label = match editor.session.theme() {
            ThemePreset::Dark => "Light Mode",
            ThemePreset::Light => "Dark Mode",
        };

        let toolbar = row![
            pick_list(
                &Language::ALL[..],
                Some(editor.session.language()),
                Message::LanguageSelected,
            )
            .text_size(13)
            .padding(Padding::from([6, 10])),
            button(text(theme_label).size(13))
                .padding(Padding::from([6, 12]))
                .style(move |_, status| filled_button(button_bg, status))
                .on_press(Message::ToggleTheme),
            button(text("AI Debug").size(13))
                .padding(Padding::from([6, 12]))
                .style(move |_, status| filled_button(assist_color, status))
                .on_press(Message::AiDebug),
            button(text("▶ Run").size(13))
                .padding(Padding::from([6, 12]))
                .style(move |_, status| filled_button(run_color, status))
                .on_press(Message::RunCode),
            horizontal_space(),
            text(format!("Last edited by: {}", editor.session.last_editor()))
                .size(13)
                .color(muted),
            button(text("Leave").size(13).color(fg))
                .padding(Padding::from([6, 12]))
                .style(move |_, status| filled_button(button_bg, status))
                .on_press(Message::LeaveRoom),
        ]
        .spacing(10)
        .padding(Padding::from(editor.style.toolbar_padding))
        .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(secondary_bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_surface<'a>(&'a self, editor: &'a EditorScreen, palette: &Theme) -> Element<'a, Message> {
        let settings = HighlightSettings {
            rules: Arc::clone(&editor.rules),
            theme: editor.session.theme(),
        };

        let editor_bg = palette.background.primary.to_iced();
        let selection = palette.background.selection.to_iced();
        let value = palette.foreground.primary.to_iced();
        let muted = palette.foreground.muted.to_iced();

        let surface = text_editor(&editor.content)
            .height(Length::Fill)
            .padding(16)
            .font(Font::MONOSPACE)
            .size(editor.style.editor_font_size)
            .style(move |_theme, _status| text_editor::Style {
                background: Background::Color(editor_bg),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: iced::Color::TRANSPARENT,
                },
                icon: muted,
                placeholder: muted,
                value,
                selection,
            })
            .highlight_with::<EditorHighlighter>(settings, |highlight, _theme| {
                highlight.to_format(Font::MONOSPACE)
            })
            .on_action(Message::EditorAction);

        container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_output_panel<'a>(&'a self, editor: &'a EditorScreen, palette: &Theme) -> Element<'a, Message> {
        let secondary_bg = palette.background.secondary.to_iced();
        let border = palette.ui.border.to_iced();
        let fg = palette.foreground.primary.to_iced();
        let muted = palette.foreground.muted.to_iced();

        let body: &str = if editor.output.is_empty() {
            OUTPUT_PLACEHOLDER
        } else {
            &editor.output
        };
        let body_color = if editor.output.is_empty() { muted } else { fg };

        let panel = column![
            text("Output:").size(12).color(fg),
            scrollable(
                text(body.to_string())
                    .size(13)
                    .font(Font::MONOSPACE)
                    .color(body_color)
            )
            .width(Length::Fill)
            .height(Length::Fill),
        ]
        .spacing(8)
        .padding(Padding::from([12, 16]));

        container(panel)
            .width(Length::Fill)
            .height(editor.style.output_panel_height)
            .style(move |_| container::Style {
                background: Some(Background::Color(secondary_bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_status_bar<'a>(&'a self, editor: &'a EditorScreen, palette: &Theme) -> Element<'a, Message> {
        let secondary_bg = palette.background.secondary.to_iced();
        let border = palette.ui.border.to_iced();
        let muted = palette.foreground.secondary.to_iced();
        let accent = palette.foreground.accent.to_iced();

        let status = row![
            text(format!("room {}", editor.room)).size(12).color(muted),
            Space::with_width(24),
            text(editor.connection.label()).size(12).color(accent),
            horizontal_space(),
            text(self.identity.name().to_string()).size(12).color(muted),
            Space::with_width(24),
            text(editor.session.language().label()).size(12).color(accent),
            Space::with_width(24),
            text(editor.session.theme().label()).size(12).color(muted),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status)
            .width(Length::Fill)
            .height(editor.style.status_bar_height)
            .style(move |_| container::Style {
                background: Some(Background::Color(secondary_bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_suggestion_modal<'a>(&'a self, editor: &'a EditorScreen, palette: &Theme) -> Element<'a, Message> {
        let body = editor.suggestion.clone().unwrap_or_default();
        let secondary_bg = palette.background.secondary.to_iced();
        let border = palette.ui.border.to_iced();
        let fg = palette.foreground.primary.to_iced();
        let button_bg = palette.background.tertiary.to_iced();

        let modal = container(
            column![
                text("AI Suggestion").size(16).color(fg),
                scrollable(text(body).size(13).font(Font::MONOSPACE).color(fg))
                    .width(Length::Fill)
                    .height(Length::Shrink),
                button(text("Close").size(13))
                    .padding(Padding::from([6, 16]))
                    .style(move |_, status| filled_button(button_bg, status))
                    .on_press(Message::DismissSuggestion),
            ]
            .spacing(16)
            .align_x(iced::Alignment::Center),
        )
        .padding(24)
        .max_width(540)
        .style(move |_| container::Style {
            background: Some(Background::Color(secondary_bg)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        });

        container(modal)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

/// Shared button style: a filled rounded rectangle that brightens on
/// hover.
fn filled_button(base: iced::Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => iced::Color {
            a: 0.85,
            ..base
        },
        _ => base,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if (base.r + base.g + base.b) / 3.0 > 0.5 {
            iced::Color::BLACK
        } else {
            iced::Color::WHITE
        },
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Run Application
// ============================================================================

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(1280.0, 800.0))
        .antialiasing(true)
        .run_with(move || App::new(flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Flags {
            config: Config::default(),
            identity: SessionIdentity::new("Alice"),
            room: None,
        })
        .0
    }

    fn editor_app(room: &str) -> App {
        App::new(Flags {
            config: Config::default(),
            identity: SessionIdentity::new("Alice"),
            room: RoomId::parse(room),
        })
        .0
    }

    fn editor(app: &App) -> &EditorScreen {
        match &app.screen {
            Screen::Editor(editor) => editor,
            Screen::Join(_) => panic!("expected editor screen"),
        }
    }

    #[test]
    fn test_join_with_valid_room_navigates() {
        let mut app = app();
        let _ = app.update(Message::RoomInputChanged("  room123  ".to_string()));
        let _ = app.update(Message::JoinRoom);

        assert_eq!(editor(&app).room.as_str(), "room123");
    }

    #[test]
    fn test_join_with_blank_room_stays_put() {
        let mut app = app();
        let _ = app.update(Message::RoomInputChanged("   ".to_string()));
        let _ = app.update(Message::JoinRoom);

        assert!(matches!(app.screen, Screen::Join(_)));
    }

    #[test]
    fn test_room_flag_deep_links_into_editor() {
        let app = editor_app("rust-study");
        let editor = editor(&app);
        assert_eq!(editor.room.as_str(), "rust-study");
        assert!(matches!(editor.connection, RoomConnection::Connecting));
    }

    #[test]
    fn test_remote_update_sets_text_and_author() {
        let mut app = editor_app("room123");
        let _ = app.update(Message::Channel(ChannelUpdate::Received(RemoteUpdate {
            author: "Bob".to_string(),
            content: "print(2)".to_string(),
        })));

        let editor = editor(&app);
        assert!(editor.session.text().contains("print(2)"));
        assert_eq!(editor.session.last_editor(), "Bob");
    }

    #[test]
    fn test_equal_remote_update_keeps_author_label() {
        let mut app = editor_app("room123");
        let current = editor(&app).session.text().to_string();
        let _ = app.update(Message::Channel(ChannelUpdate::Received(RemoteUpdate {
            author: "Bob".to_string(),
            content: current,
        })));

        assert_eq!(editor(&app).session.last_editor(), "No one yet");
    }

    #[test]
    fn test_channel_close_transitions_connection() {
        let mut app = editor_app("room123");
        let _ = app.update(Message::Channel(ChannelUpdate::Closed));
        assert!(matches!(editor(&app).connection, RoomConnection::Closed));
    }

    #[test]
    fn test_leave_room_returns_to_join_with_room_prefilled() {
        let mut app = editor_app("room123");
        let _ = app.update(Message::LeaveRoom);

        match &app.screen {
            Screen::Join(join) => assert_eq!(join.room_input, "room123"),
            Screen::Editor(_) => panic!("expected join screen"),
        }
    }

    #[test]
    fn test_run_result_lands_in_output_panel() {
        let mut app = editor_app("room123");
        let _ = app.update(Message::RunFinished("1\n".to_string()));
        assert_eq!(editor(&app).output, "1\n");
    }

    #[test]
    fn test_debug_result_opens_modal() {
        let mut app = editor_app("room123");
        let _ = app.update(Message::DebugFinished("Check indentation.".to_string()));
        assert_eq!(
            editor(&app).suggestion.as_deref(),
            Some("Check indentation.")
        );

        let _ = app.update(Message::DismissSuggestion);
        assert!(editor(&app).suggestion.is_none());
    }

    #[test]
    fn test_language_switch_registers_ruleset_once() {
        let mut app = editor_app("room123");
        let _ = app.update(Message::LanguageSelected(Language::Java));
        let first = Arc::clone(&editor(&app).rules);
        let _ = app.update(Message::LanguageSelected(Language::Python));
        let _ = app.update(Message::LanguageSelected(Language::Java));
        let second = Arc::clone(&editor(&app).rules);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(editor(&app).session.language(), Language::Java);
    }

    #[test]
    fn test_theme_toggle_flips_presets() {
        let mut app = editor_app("room123");
        assert_eq!(editor(&app).session.theme(), ThemePreset::Dark);
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(editor(&app).session.theme(), ThemePreset::Light);
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(editor(&app).session.theme(), ThemePreset::Dark);
    }
}
