//! Per-session overlay chrome
//!
//! Every minigame shares the same shell: a start screen (or the
//! choose-starting-player screen for connect four), pause, game-over,
//! settings, quit-confirm and back-to-menu-confirm overlays. The shell owns
//! the menus and the overlay booleans; the host acts on the events it
//! returns.

use macroquad::prelude::{KeyCode, is_key_pressed};

use super::GameKind;
use super::draw;
use crate::games::PlayerId;
use crate::ui::menu::{LabelTint, Menu, MenuItem};
use crate::ui::theme::Theme;

/// Mouse snapshot for one frame
#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    pub pos: glam::Vec2,
    /// The cursor moved since last frame (hover only follows motion, so it
    /// never fights keyboard selection)
    pub moved: bool,
    pub clicked: bool,
}

/// Everything a menu button can do, across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    // Main menu
    OpenPicker,
    PickGame(GameKind),
    // Session screens
    Start,
    StartingPlayer(PlayerId),
    Resume,
    Restart,
    // Shared
    OpenSettings,
    OpenQuit,
    ConfirmMenu,
    GoToMenu,
    ToggleColorMode,
    Back,
    Exit,
}

/// Which overlay is on top this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Start,
    Pause,
    GameOver,
    Settings,
    QuitConfirm,
    MenuConfirm,
}

/// Event the host must act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Started,
    StartedWith(PlayerId),
    Resumed,
    RestartRequested,
    GoToMenu,
    QuitApp,
    ToggleTheme,
}

/// How a session begins: a plain start button, or picking who goes first
enum StartFlow {
    Button(Menu<MenuAction>),
    ChooseStarter(Menu<MenuAction>),
}

/// Overlay state and menus for one minigame session
pub struct Shell {
    pub started: bool,
    pub paused: bool,
    show_settings: bool,
    show_quit: bool,
    confirm_menu: bool,
    start_flow: StartFlow,
    pause_menu: Menu<MenuAction>,
    game_over_menu: Menu<MenuAction>,
    settings_menu: Menu<MenuAction>,
    quit_menu: Menu<MenuAction>,
    menu_confirm: Menu<MenuAction>,
}

impl Shell {
    pub fn new(kind: GameKind) -> Self {
        let start_flow = if kind == GameKind::ConnectFour {
            StartFlow::ChooseStarter(starter_menu())
        } else {
            StartFlow::Button(start_menu())
        };
        Self {
            started: false,
            paused: false,
            show_settings: false,
            show_quit: false,
            confirm_menu: false,
            start_flow,
            pause_menu: pause_menu(),
            game_over_menu: game_over_menu(),
            settings_menu: settings_menu(),
            quit_menu: quit_menu(),
            menu_confirm: menu_confirm(),
        }
    }

    /// Topmost overlay, by fixed precedence
    pub fn active_overlay(&self, round_over: bool) -> Overlay {
        if self.show_quit {
            Overlay::QuitConfirm
        } else if self.confirm_menu {
            Overlay::MenuConfirm
        } else if self.show_settings {
            Overlay::Settings
        } else if round_over {
            Overlay::GameOver
        } else if !self.started {
            Overlay::Start
        } else if self.paused {
            Overlay::Pause
        } else {
            Overlay::None
        }
    }

    /// Drive the active overlay's menu; returns an event for the host
    pub fn handle(&mut self, mouse: &MouseState, round_over: bool) -> Option<ShellEvent> {
        let action = match self.active_overlay(round_over) {
            Overlay::None => return None,
            Overlay::Start => match &mut self.start_flow {
                StartFlow::Button(menu) | StartFlow::ChooseStarter(menu) => {
                    drive_menu(menu, mouse)
                }
            },
            Overlay::Pause => drive_menu(&mut self.pause_menu, mouse),
            Overlay::GameOver => drive_menu(&mut self.game_over_menu, mouse),
            Overlay::Settings => drive_menu(&mut self.settings_menu, mouse),
            Overlay::QuitConfirm => drive_menu(&mut self.quit_menu, mouse),
            Overlay::MenuConfirm => drive_menu(&mut self.menu_confirm, mouse),
        }?;
        self.dispatch(action)
    }

    fn dispatch(&mut self, action: MenuAction) -> Option<ShellEvent> {
        match action {
            MenuAction::Start => {
                self.started = true;
                self.reset_start_flow();
                Some(ShellEvent::Started)
            }
            MenuAction::StartingPlayer(player) => {
                self.started = true;
                self.reset_start_flow();
                Some(ShellEvent::StartedWith(player))
            }
            MenuAction::Resume => {
                self.paused = false;
                self.pause_menu.reset();
                Some(ShellEvent::Resumed)
            }
            MenuAction::Restart => {
                self.game_over_menu.reset();
                Some(ShellEvent::RestartRequested)
            }
            MenuAction::OpenSettings => {
                self.show_settings = true;
                None
            }
            MenuAction::OpenQuit => {
                self.show_quit = true;
                None
            }
            MenuAction::ConfirmMenu => {
                self.confirm_menu = true;
                None
            }
            MenuAction::Back => {
                if self.show_quit {
                    self.show_quit = false;
                    self.quit_menu.reset();
                } else if self.confirm_menu {
                    self.confirm_menu = false;
                    self.menu_confirm.reset();
                } else if self.show_settings {
                    self.show_settings = false;
                    self.settings_menu.reset();
                }
                None
            }
            MenuAction::GoToMenu => Some(ShellEvent::GoToMenu),
            MenuAction::ToggleColorMode => Some(ShellEvent::ToggleTheme),
            MenuAction::Exit => Some(ShellEvent::QuitApp),
            // Main-menu actions never appear on session screens
            MenuAction::OpenPicker | MenuAction::PickGame(_) => None,
        }
    }

    fn reset_start_flow(&mut self) {
        match &mut self.start_flow {
            StartFlow::Button(menu) | StartFlow::ChooseStarter(menu) => menu.reset(),
        }
    }

    /// Render the overlay. Connect four paints over the whole board; the
    /// real-time games draw their overlays straight over the playfield.
    pub fn draw_overlay(&self, overlay: Overlay, theme: &Theme, fill_background: bool) {
        if overlay == Overlay::None {
            return;
        }
        if fill_background {
            draw::fill_background(theme);
            draw::draw_border(theme);
        }
        match overlay {
            Overlay::None => {}
            Overlay::Start => match &self.start_flow {
                StartFlow::Button(menu) | StartFlow::ChooseStarter(menu) => {
                    draw::draw_menu(menu, theme, None)
                }
            },
            Overlay::Pause => draw::draw_menu(&self.pause_menu, theme, None),
            Overlay::GameOver => draw::draw_menu(&self.game_over_menu, theme, None),
            Overlay::Settings => {
                draw::draw_menu(&self.settings_menu, theme, Some((0, theme.toggle_label())))
            }
            Overlay::QuitConfirm => draw::draw_menu(&self.quit_menu, theme, None),
            Overlay::MenuConfirm => draw::draw_menu(&self.menu_confirm, theme, None),
        }
    }
}

/// Drive a menu from this frame's keyboard and mouse state
pub fn drive_menu(menu: &mut Menu<MenuAction>, mouse: &MouseState) -> Option<MenuAction> {
    if is_key_pressed(KeyCode::Down) {
        menu.scroll_down();
    }
    if is_key_pressed(KeyCode::Up) {
        menu.scroll_up();
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
        return Some(menu.confirm());
    }
    if mouse.moved {
        if let Some(index) = draw::hit_button(menu.len(), mouse.pos) {
            menu.hover(index);
        }
    }
    if mouse.clicked {
        if let Some(index) = draw::hit_button(menu.len(), mouse.pos) {
            return menu.click(index);
        }
    }
    None
}

pub fn main_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Choose Game", MenuAction::OpenPicker),
        MenuItem::new("Settings", MenuAction::OpenSettings),
        MenuItem::new("Quit", MenuAction::OpenQuit),
    ])
}

pub fn picker_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Trails", MenuAction::PickGame(GameKind::Trails)),
        MenuItem::new("Pong", MenuAction::PickGame(GameKind::Pong)),
        MenuItem::new("Trail Pong", MenuAction::PickGame(GameKind::TrailPong)),
        MenuItem::new("Connect 4", MenuAction::PickGame(GameKind::ConnectFour)),
        MenuItem::new("Back", MenuAction::Back),
    ])
}

pub fn settings_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        // Label is overridden at draw time with the target color mode
        MenuItem::new("Color Mode", MenuAction::ToggleColorMode),
        MenuItem::new("Back", MenuAction::Back),
    ])
}

pub fn quit_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Exit", MenuAction::Exit),
        MenuItem::new("Back", MenuAction::Back),
    ])
}

fn start_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Start", MenuAction::Start),
        MenuItem::new("Settings", MenuAction::OpenSettings),
        MenuItem::new("Menu", MenuAction::ConfirmMenu),
        MenuItem::new("Quit", MenuAction::OpenQuit),
    ])
}

fn starter_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::tinted(
            "Player 1 Starts",
            MenuAction::StartingPlayer(PlayerId::One),
            LabelTint::PlayerOne,
        ),
        MenuItem::tinted(
            "Player 2 Starts",
            MenuAction::StartingPlayer(PlayerId::Two),
            LabelTint::PlayerTwo,
        ),
        MenuItem::new("Settings", MenuAction::OpenSettings),
        MenuItem::new("Menu", MenuAction::ConfirmMenu),
        MenuItem::new("Quit", MenuAction::OpenQuit),
    ])
}

fn pause_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Resume", MenuAction::Resume),
        MenuItem::new("Settings", MenuAction::OpenSettings),
        MenuItem::new("Menu", MenuAction::ConfirmMenu),
        MenuItem::new("Quit", MenuAction::OpenQuit),
    ])
}

fn game_over_menu() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Restart", MenuAction::Restart),
        MenuItem::new("Settings", MenuAction::OpenSettings),
        MenuItem::new("Menu", MenuAction::ConfirmMenu),
        MenuItem::new("Quit", MenuAction::OpenQuit),
    ])
}

fn menu_confirm() -> Menu<MenuAction> {
    Menu::new(vec![
        MenuItem::new("Menu", MenuAction::GoToMenu),
        MenuItem::new("Back", MenuAction::Back),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_precedence() {
        let mut shell = Shell::new(GameKind::Pong);
        assert_eq!(shell.active_overlay(false), Overlay::Start);

        shell.started = true;
        assert_eq!(shell.active_overlay(false), Overlay::None);
        assert_eq!(shell.active_overlay(true), Overlay::GameOver);

        shell.paused = true;
        assert_eq!(shell.active_overlay(false), Overlay::Pause);

        shell.show_settings = true;
        assert_eq!(shell.active_overlay(false), Overlay::Settings);

        shell.show_quit = true;
        assert_eq!(shell.active_overlay(false), Overlay::QuitConfirm);
    }

    #[test]
    fn test_dispatch_start_and_resume() {
        let mut shell = Shell::new(GameKind::Pong);
        assert_eq!(shell.dispatch(MenuAction::Start), Some(ShellEvent::Started));
        assert!(shell.started);

        shell.paused = true;
        assert_eq!(
            shell.dispatch(MenuAction::Resume),
            Some(ShellEvent::Resumed)
        );
        assert!(!shell.paused);
    }

    #[test]
    fn test_back_closes_topmost_overlay() {
        let mut shell = Shell::new(GameKind::Pong);
        shell.started = true;
        shell.paused = true;
        shell.dispatch(MenuAction::OpenSettings);
        assert_eq!(shell.active_overlay(false), Overlay::Settings);
        shell.dispatch(MenuAction::Back);
        // Settings closed, back on the pause screen underneath
        assert_eq!(shell.active_overlay(false), Overlay::Pause);
    }

    #[test]
    fn test_connect_four_uses_starter_screen() {
        let mut shell = Shell::new(GameKind::ConnectFour);
        assert_eq!(shell.active_overlay(false), Overlay::Start);
        assert_eq!(
            shell.dispatch(MenuAction::StartingPlayer(PlayerId::Two)),
            Some(ShellEvent::StartedWith(PlayerId::Two))
        );
        assert!(shell.started);
    }
}
