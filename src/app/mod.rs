//! The macroquad host
//!
//! Owns the window loop, routes each frame to the active screen (main menu
//! or a minigame session) and carries the theme and settings. Cancellation
//! (quit, back to menu) is checked before any simulation work each frame.

pub mod draw;
pub mod shell;

use glam::Vec2;
use macroquad::prelude::{
    KeyCode, MouseButton, clear_background, get_frame_time, is_key_pressed,
    is_mouse_button_pressed, mouse_position, next_frame, screen_height, screen_width, show_mouse,
};

use crate::games::connect_four::ConnectFourGame;
use crate::games::pong::PongGame;
use crate::games::trail_pong::TrailPongGame;
use crate::games::trails::TrailsGame;
use crate::games::{PlayerId, RoundEvent};
use crate::input;
use crate::settings::Settings;
use crate::sim::rect::Rect;
use crate::sim::round::{RoundPhase, RoundState};
use crate::ui::menu::Menu;
use crate::ui::theme::Theme;
use shell::{MenuAction, MouseState, Overlay, Shell, ShellEvent, drive_menu};

/// Upper bound on a frame's `dt`; a hitch must not teleport the ball
const MAX_FRAME_DT: f32 = 0.1;

/// The suite's four minigames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Trails,
    Pong,
    TrailPong,
    ConnectFour,
}

impl GameKind {
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Trails => "Trails",
            GameKind::Pong => "Pong",
            GameKind::TrailPong => "Trail Pong",
            GameKind::ConnectFour => "Connect 4",
        }
    }
}

/// Something a screen asks the app to do
enum AppEvent {
    StartGame(GameKind),
    GoToMenu,
    ToggleTheme,
    Quit,
}

/// Top-level screen
enum Screen {
    Menu(MenuScreen),
    Game(GameScreen),
}

/// The main menu with its picker/settings/quit sub-screens
struct MenuScreen {
    main: Menu<MenuAction>,
    picker: Menu<MenuAction>,
    settings: Menu<MenuAction>,
    quit: Menu<MenuAction>,
    show_picker: bool,
    show_settings: bool,
    show_quit: bool,
}

impl MenuScreen {
    fn new() -> Self {
        Self {
            main: shell::main_menu(),
            picker: shell::picker_menu(),
            settings: shell::settings_menu(),
            quit: shell::quit_menu(),
            show_picker: false,
            show_settings: false,
            show_quit: false,
        }
    }

    fn frame(&mut self, mouse: &MouseState) -> Option<AppEvent> {
        let action = if self.show_quit {
            drive_menu(&mut self.quit, mouse)
        } else if self.show_picker {
            drive_menu(&mut self.picker, mouse)
        } else if self.show_settings {
            drive_menu(&mut self.settings, mouse)
        } else {
            drive_menu(&mut self.main, mouse)
        }?;

        match action {
            MenuAction::OpenPicker => {
                self.show_picker = true;
                None
            }
            MenuAction::OpenSettings => {
                self.show_settings = true;
                None
            }
            MenuAction::OpenQuit => {
                self.show_quit = true;
                None
            }
            MenuAction::PickGame(kind) => {
                self.show_picker = false;
                self.picker.reset();
                Some(AppEvent::StartGame(kind))
            }
            MenuAction::ToggleColorMode => Some(AppEvent::ToggleTheme),
            MenuAction::Back => {
                if self.show_quit {
                    self.show_quit = false;
                    self.quit.reset();
                } else if self.show_picker {
                    self.show_picker = false;
                    self.picker.reset();
                } else if self.show_settings {
                    self.show_settings = false;
                    self.settings.reset();
                }
                None
            }
            MenuAction::Exit => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn draw(&self, theme: &Theme) {
        clear_background(theme.background);
        draw::draw_border(theme);
        if self.show_quit {
            draw::draw_menu(&self.quit, theme, None);
        } else if self.show_picker {
            draw::draw_menu(&self.picker, theme, None);
        } else if self.show_settings {
            draw::draw_menu(&self.settings, theme, Some((0, theme.toggle_label())));
        } else {
            draw::draw_menu(&self.main, theme, None);
        }
    }
}

/// One live minigame session
enum GameInstance {
    Trails(TrailsGame),
    Pong(PongGame),
    TrailPong(TrailPongGame),
    ConnectFour(ConnectFourGame),
}

impl GameInstance {
    fn update(&mut self, dt: f32) -> Option<RoundEvent> {
        match self {
            GameInstance::Trails(game) => game.update(&input::poll_movement(), dt),
            GameInstance::Pong(game) => game.update(&input::poll_movement(), dt),
            GameInstance::TrailPong(game) => game.update(&input::poll_movement(), dt),
            GameInstance::ConnectFour(game) => {
                let turn = input::poll_turn(game.current_player());
                game.update(&turn)
            }
        }
    }

    fn restart(&mut self) {
        match self {
            GameInstance::Trails(game) => game.restart(),
            GameInstance::Pong(game) => game.restart(),
            GameInstance::TrailPong(game) => game.restart(),
            GameInstance::ConnectFour(game) => game.restart(),
        }
    }

    fn resume(&mut self) {
        match self {
            GameInstance::Trails(game) => game.resume(),
            GameInstance::Pong(game) => game.resume(),
            GameInstance::TrailPong(game) => game.resume(),
            // Turn-based: no countdown to re-enter
            GameInstance::ConnectFour(_) => {}
        }
    }

    fn round_state(&self) -> Option<&RoundState> {
        match self {
            GameInstance::Trails(game) => Some(&game.round),
            GameInstance::Pong(game) => Some(&game.round),
            GameInstance::TrailPong(game) => Some(&game.round),
            GameInstance::ConnectFour(_) => None,
        }
    }
}

/// A minigame session plus its overlay shell
struct GameScreen {
    kind: GameKind,
    shell: Shell,
    game: GameInstance,
    /// Connect four: Escape swapped the winner banner for the game-over
    /// overlay
    banner_dismissed: bool,
}

impl GameScreen {
    fn new(kind: GameKind) -> Self {
        let bounds = Rect::from_size(Vec2::new(screen_width(), screen_height()));
        let seed: u64 = rand::random();
        let game = match kind {
            GameKind::Trails => GameInstance::Trails(TrailsGame::new(bounds)),
            GameKind::Pong => GameInstance::Pong(PongGame::new(bounds, seed)),
            GameKind::TrailPong => GameInstance::TrailPong(TrailPongGame::new(bounds, seed)),
            GameKind::ConnectFour => GameInstance::ConnectFour(ConnectFourGame::new(bounds)),
        };
        Self {
            kind,
            shell: Shell::new(kind),
            game,
            banner_dismissed: false,
        }
    }

    /// Whether the game-over overlay should be up
    fn round_over(&self) -> bool {
        match &self.game {
            GameInstance::ConnectFour(game) => game.winner.is_some() && self.banner_dismissed,
            _ => self
                .game
                .round_state()
                .is_some_and(|round| round.is_round_over()),
        }
    }

    /// Escape only pauses once the countdown has elapsed
    fn can_pause(&self) -> bool {
        match self.game.round_state() {
            Some(round) => match round.phase() {
                RoundPhase::Playing => true,
                RoundPhase::CountingDown { remaining } => remaining <= 0.0,
                RoundPhase::RoundOver => false,
            },
            None => true,
        }
    }

    fn restart(&mut self) {
        self.banner_dismissed = false;
        self.game.restart();
        if matches!(self.game, GameInstance::ConnectFour(_)) {
            // A rematch goes back through the choose-starting-player screen
            self.shell.started = false;
        }
    }

    fn frame(&mut self, mouse: &MouseState, dt: f32) -> Option<AppEvent> {
        let round_over = self.round_over();
        if self.shell.active_overlay(round_over) != Overlay::None {
            let event = self.shell.handle(mouse, round_over)?;
            return match event {
                ShellEvent::Started => None,
                ShellEvent::StartedWith(starter) => {
                    if let GameInstance::ConnectFour(game) = &mut self.game {
                        game.set_starting_player(starter);
                    }
                    None
                }
                ShellEvent::Resumed => {
                    self.game.resume();
                    None
                }
                ShellEvent::RestartRequested => {
                    self.restart();
                    None
                }
                ShellEvent::GoToMenu => Some(AppEvent::GoToMenu),
                ShellEvent::QuitApp => Some(AppEvent::Quit),
                ShellEvent::ToggleTheme => Some(AppEvent::ToggleTheme),
            };
        }

        // Connect four shows its winner banner over the live board; Escape
        // moves on to the game-over overlay, confirm/click restarts
        if let GameInstance::ConnectFour(game) = &mut self.game {
            if game.winner.is_some() && !self.banner_dismissed {
                if is_key_pressed(KeyCode::Escape) {
                    self.banner_dismissed = true;
                } else if is_key_pressed(KeyCode::Space)
                    || is_key_pressed(KeyCode::Enter)
                    || (mouse.clicked && draw::restart_banner_rect().contains(mouse.pos))
                {
                    self.restart();
                }
                return None;
            }
        }

        if is_key_pressed(KeyCode::Escape) && self.can_pause() {
            self.shell.paused = true;
            return None;
        }

        if let Some(event) = self.game.update(dt) {
            let winner = match event.winner {
                PlayerId::One => "player one",
                PlayerId::Two => "player two",
            };
            log::info!("{}: round over, {winner} scores", self.kind.title());
        }
        None
    }

    fn cursor_visible(&self) -> bool {
        if self.shell.active_overlay(self.round_over()) != Overlay::None {
            return true;
        }
        match &self.game {
            GameInstance::ConnectFour(game) => game.winner.is_some(),
            _ => false,
        }
    }

    fn draw(&self, theme: &Theme) {
        clear_background(theme.background);
        match &self.game {
            GameInstance::Trails(game) => draw::draw_trails(game, theme),
            GameInstance::Pong(game) => draw::draw_pong(game, theme),
            GameInstance::TrailPong(game) => draw::draw_trail_pong(game, theme),
            GameInstance::ConnectFour(game) => {
                let show_banner = game.winner.is_some() && !self.banner_dismissed;
                draw::draw_connect_four(game, theme, show_banner);
            }
        }
        draw::draw_border(theme);

        if self.shell.started && !self.shell.paused {
            if let Some(number) = self.game.round_state().and_then(RoundState::countdown_display)
            {
                let y_frac = match self.kind {
                    GameKind::Trails => 0.5,
                    _ => 0.25,
                };
                draw::draw_countdown(number, y_frac, theme);
            }
        }

        let overlay = self.shell.active_overlay(self.round_over());
        let fill = self.kind == GameKind::ConnectFour;
        self.shell.draw_overlay(overlay, theme, fill);
    }
}

fn poll_mouse(last: &mut Vec2) -> MouseState {
    let (x, y) = mouse_position();
    let pos = Vec2::new(x, y);
    let moved = pos != *last;
    *last = pos;
    MouseState {
        pos,
        moved,
        clicked: is_mouse_button_pressed(MouseButton::Left),
    }
}

/// Run the suite until the player quits
pub async fn run() {
    let mut settings = Settings::load();
    let mut theme = Theme::from_mode(settings.dark_mode);
    let mut screen = Screen::Menu(MenuScreen::new());
    let mut last_mouse = {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    };

    loop {
        let dt = get_frame_time().min(MAX_FRAME_DT);
        let mouse = poll_mouse(&mut last_mouse);

        let event = match &mut screen {
            Screen::Menu(menu) => menu.frame(&mouse),
            Screen::Game(game) => game.frame(&mouse, dt),
        };

        match event {
            Some(AppEvent::StartGame(kind)) => {
                log::info!("Starting {}", kind.title());
                screen = Screen::Game(GameScreen::new(kind));
            }
            Some(AppEvent::GoToMenu) => {
                // Dropping the session resets its scores
                log::info!("Returning to menu");
                screen = Screen::Menu(MenuScreen::new());
            }
            Some(AppEvent::ToggleTheme) => {
                theme = theme.toggled();
                settings.dark_mode = theme.dark;
                settings.save();
            }
            Some(AppEvent::Quit) => break,
            None => {}
        }

        let cursor = match &screen {
            Screen::Menu(_) => true,
            Screen::Game(game) => game.cursor_visible(),
        };
        show_mouse(cursor);

        match &screen {
            Screen::Menu(menu) => menu.draw(&theme),
            Screen::Game(game) => game.draw(&theme),
        }

        next_frame().await;
    }
}
