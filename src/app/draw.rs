//! Immediate-mode drawing for every screen
//!
//! Pure read access to the sessions and menus; nothing here mutates game
//! state. All layout is recomputed from the live window size each frame.

use glam::Vec2;
use macroquad::prelude::{
    Color, draw_circle, draw_line, draw_rectangle, draw_rectangle_lines, draw_text, measure_text,
    screen_height, screen_width,
};

use crate::games::connect_four::{COLS, ConnectFourGame, PIECE_RADIUS, ROWS, SQUARE_SIZE};
use crate::games::pong::PongGame;
use crate::games::trail_pong::TrailPongGame;
use crate::games::trails::TrailsGame;
use crate::games::Runner;
use crate::sim::rect::Rect;
use crate::ui::menu::{LabelTint, Menu};
use crate::ui::theme::Theme;

pub const BUTTON_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 100.0;
const FONT_BUTTON: f32 = 50.0;
const FONT_SELECTED: f32 = 65.0;
const FONT_SCORE: f32 = 40.0;
const FONT_COUNTDOWN: f32 = 150.0;
const BORDER_WIDTH: f32 = 5.0;

/// Button rectangle for item `index` in a centered column of `count`
pub fn button_rect(index: usize, count: usize) -> Rect {
    let w = screen_width();
    let h = screen_height();
    let center_y = h / 2.0 - (count as f32 * BUTTON_HEIGHT) / 2.0
        + BUTTON_HEIGHT / 2.0
        + index as f32 * BUTTON_HEIGHT;
    Rect::new(
        w / 2.0 - BUTTON_WIDTH / 2.0,
        center_y - BUTTON_HEIGHT / 2.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// Index of the button under `pos`, if any
pub fn hit_button(count: usize, pos: Vec2) -> Option<usize> {
    (0..count).find(|&i| button_rect(i, count).contains(pos))
}

/// The clickable restart banner shown over a finished connect-four board
pub fn restart_banner_rect() -> Rect {
    Rect::new(
        screen_width() / 2.0 - BUTTON_WIDTH / 2.0,
        screen_height() / 5.0 - BUTTON_HEIGHT / 2.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

pub fn fill_background(theme: &Theme) {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        theme.background,
    );
}

pub fn draw_border(theme: &Theme) {
    draw_rectangle_lines(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        BORDER_WIDTH,
        theme.foreground,
    );
}

fn draw_text_centered(text: &str, center: Vec2, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        center.x - dims.width / 2.0,
        center.y + dims.offset_y - dims.height / 2.0,
        font_size,
        color,
    );
}

/// Render a menu as a centered button column. `label_override` swaps one
/// item's label at draw time (the settings toggle shows its target mode).
pub fn draw_menu<A: Copy>(menu: &Menu<A>, theme: &Theme, label_override: Option<(usize, &str)>) {
    let count = menu.len();
    for (i, item) in menu.items().iter().enumerate() {
        let rect = button_rect(i, count);
        let (font_size, color) = if i == menu.selected() {
            let color = match item.tint {
                LabelTint::Default => theme.foreground,
                LabelTint::PlayerOne => theme.player_one,
                LabelTint::PlayerTwo => theme.player_two,
            };
            (FONT_SELECTED, color)
        } else {
            (FONT_BUTTON, theme.dim)
        };
        let label = match label_override {
            Some((index, label)) if index == i => label,
            _ => item.label,
        };
        draw_text_centered(label, rect.center(), font_size, color);
    }
}

pub fn draw_scores(left: u32, right: u32, theme: &Theme) {
    let w = screen_width();
    draw_text_centered(
        &left.to_string(),
        Vec2::new(w / 4.0, 50.0),
        FONT_SCORE,
        theme.foreground,
    );
    draw_text_centered(
        &right.to_string(),
        Vec2::new(3.0 * w / 4.0, 50.0),
        FONT_SCORE,
        theme.foreground,
    );
}

/// The big 3-2-1 between rounds; `y_frac` places it per game
pub fn draw_countdown(number: u32, y_frac: f32, theme: &Theme) {
    draw_text_centered(
        &number.to_string(),
        Vec2::new(screen_width() / 2.0, screen_height() * y_frac),
        FONT_COUNTDOWN,
        theme.foreground,
    );
}

/// A runner and its trail, oldest points faintest
fn draw_runner(runner: &Runner, color: Color) {
    let size = runner.body.size;
    let len = runner.trail.len();
    for (i, pos) in runner.trail.iter().enumerate() {
        let alpha = 0.196 + 0.804 * (i as f32 / len as f32);
        let faded = Color::new(color.r, color.g, color.b, alpha);
        draw_circle(pos.x, pos.y, size / 10.0, faded);
    }
    let center = runner.body.center();
    draw_circle(center.x, center.y, size / 3.0, color);
}

pub fn draw_trails(game: &TrailsGame, theme: &Theme) {
    let (left, right) = game.scores();
    draw_scores(left, right, theme);
    draw_runner(&game.players[0], theme.player_one);
    draw_runner(&game.players[1], theme.player_two);
}

pub fn draw_pong(game: &PongGame, theme: &Theme) {
    let (left, right) = game.scores();
    draw_scores(left, right, theme);
    let colors = [theme.player_one, theme.player_two];
    for (player, color) in game.players.iter().zip(colors) {
        let rect = player.paddle.rect();
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }
    draw_circle(
        game.ball.pos.x,
        game.ball.pos.y,
        game.ball.radius,
        theme.foreground,
    );
}

pub fn draw_trail_pong(game: &TrailPongGame, theme: &Theme) {
    let (left, right) = game.scores();
    draw_scores(left, right, theme);
    draw_runner(&game.players[0], theme.player_one);
    draw_runner(&game.players[1], theme.player_two);
    draw_circle(
        game.ball.pos.x,
        game.ball.pos.y,
        game.ball.radius,
        theme.foreground,
    );
}

/// Board, cursor piece, falling piece, winning line and restart banner
pub fn draw_connect_four(game: &ConnectFourGame, theme: &Theme, show_banner: bool) {
    let (left, right) = game.scores();
    draw_scores(left, right, theme);

    // Cursor piece above the board while nothing is falling
    if game.drop.is_none() && game.winner.is_none() {
        let mover = game.current_player();
        let center = game.cursor_center(game.players[mover.index()].current_col);
        draw_circle(center.x, center.y, PIECE_RADIUS, theme.player(mover));
    }

    for row in 0..ROWS {
        for col in 0..COLS {
            let center = game.cell_center(row, col);
            draw_circle(center.x, center.y, PIECE_RADIUS + 3.0, theme.foreground);
            let color = match game.board[row][col] {
                Some(player) => theme.player(player),
                None => theme.background,
            };
            draw_circle(center.x, center.y, PIECE_RADIUS, color);
        }
    }

    if let (Some(first), Some(last)) = (game.winning_cells.first(), game.winning_cells.last()) {
        let a = game.cell_center(first.0, first.1);
        let b = game.cell_center(last.0, last.1);
        draw_line(a.x, a.y, b.x, b.y, 8.0, theme.foreground);
    }

    // Board frame and tray
    let offset = game.board_offset();
    draw_rectangle_lines(
        offset.x - 25.0,
        offset.y + SQUARE_SIZE,
        SQUARE_SIZE * COLS as f32 + 50.0,
        SQUARE_SIZE * ROWS as f32,
        3.0,
        theme.foreground,
    );
    draw_rectangle_lines(
        offset.x - 50.0,
        offset.y + SQUARE_SIZE * (ROWS as f32 + 1.0),
        SQUARE_SIZE * COLS as f32 + 100.0,
        50.0,
        3.0,
        theme.foreground,
    );

    if let Some(drop) = game.drop {
        let x = game.cursor_center(drop.col).x;
        draw_circle(x, drop.y, PIECE_RADIUS, theme.player(game.current_player()));
    }

    if show_banner {
        let banner = restart_banner_rect();
        draw_text_centered("Restart", banner.center(), FONT_SELECTED, theme.foreground);
    }
}
