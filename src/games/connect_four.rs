//! Connect four
//!
//! The one turn-based game in the suite. No round state machine: a round
//! is a sequence of drops until somebody lines up four, and the only
//! animation is the falling piece.

use glam::Vec2;

use super::{PlayerId, RoundEvent};
use crate::input::TurnInput;
use crate::sim::rect::Rect;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Board cell size in pixels
pub const SQUARE_SIZE: f32 = 100.0;
/// Piece radius
pub const PIECE_RADIUS: f32 = 45.0;
/// Falling-piece speed in pixels per frame
const DROP_SPEED: f32 = 18.0;
/// Column the cursor returns to after every drop
const START_COLUMN: usize = 3;

pub type Board = [[Option<PlayerId>; COLS]; ROWS];

/// Per-player column cursor and score
#[derive(Debug, Clone)]
pub struct TurnPlayer {
    pub current_col: usize,
    pub score: u32,
    pub is_turn: bool,
}

/// A piece in flight
#[derive(Debug, Clone, Copy)]
pub struct DropAnimation {
    pub col: usize,
    pub row: usize,
    /// Current y position of the falling piece center (pixels)
    pub y: f32,
}

/// One connect-four session
#[derive(Debug, Clone)]
pub struct ConnectFourGame {
    pub board: Board,
    pub players: [TurnPlayer; 2],
    pub drop: Option<DropAnimation>,
    pub winner: Option<PlayerId>,
    /// Cells of the winning run, for the strike-through line
    pub winning_cells: Vec<(usize, usize)>,
    bounds: Rect,
}

impl ConnectFourGame {
    pub fn new(bounds: Rect) -> Self {
        Self {
            board: [[None; COLS]; ROWS],
            players: [
                TurnPlayer {
                    current_col: START_COLUMN,
                    score: 0,
                    is_turn: false,
                },
                TurnPlayer {
                    current_col: START_COLUMN,
                    score: 0,
                    is_turn: false,
                },
            ],
            drop: None,
            winner: None,
            winning_cells: Vec::new(),
            bounds,
        }
    }

    /// Clear the board for a rematch; scores persist and the starting
    /// player is chosen again
    pub fn restart(&mut self) {
        self.board = [[None; COLS]; ROWS];
        self.drop = None;
        self.winner = None;
        self.winning_cells.clear();
        for player in &mut self.players {
            player.current_col = START_COLUMN;
            player.is_turn = false;
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_starting_player(&mut self, starter: PlayerId) {
        self.players[starter.index()].is_turn = true;
        self.players[starter.other().index()].is_turn = false;
    }

    pub fn current_player(&self) -> PlayerId {
        if self.players[0].is_turn {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score, self.players[1].score)
    }

    /// Top-left corner of the board area (one extra row above the grid is
    /// reserved for the cursor piece)
    pub fn board_offset(&self) -> Vec2 {
        Vec2::new(
            (self.bounds.w - COLS as f32 * SQUARE_SIZE) / 2.0,
            (self.bounds.h - (ROWS as f32 + 1.0) * SQUARE_SIZE) / 2.0,
        )
    }

    /// Center of a grid cell in pixels
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        let offset = self.board_offset();
        Vec2::new(
            offset.x + col as f32 * SQUARE_SIZE + SQUARE_SIZE / 2.0,
            offset.y + row as f32 * SQUARE_SIZE + SQUARE_SIZE + SQUARE_SIZE / 2.0,
        )
    }

    /// Center of the cursor piece above a column
    pub fn cursor_center(&self, col: usize) -> Vec2 {
        let offset = self.board_offset();
        Vec2::new(
            offset.x + col as f32 * SQUARE_SIZE + SQUARE_SIZE / 2.0,
            offset.y + SQUARE_SIZE / 2.0,
        )
    }

    /// A column accepts a drop while its top cell is free
    pub fn is_valid_column(&self, col: usize) -> bool {
        self.board[0][col].is_none()
    }

    /// Lowest free row in a column
    fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&r| self.board[r][col].is_none())
    }

    /// Advance one frame: animate a falling piece, otherwise apply the
    /// current player's move/drop commands. Reports the winner once, on
    /// the frame the winning piece lands.
    pub fn update(&mut self, input: &TurnInput) -> Option<RoundEvent> {
        if self.winner.is_some() {
            return None;
        }

        if let Some(mut drop) = self.drop {
            let target = self.cell_center(drop.row, drop.col).y;
            drop.y = (drop.y + DROP_SPEED).min(target);
            if drop.y < target {
                self.drop = Some(drop);
                return None;
            }

            // Landed: commit the piece and pass the turn
            let mover = self.current_player();
            self.board[drop.row][drop.col] = Some(mover);
            self.drop = None;
            for player in &mut self.players {
                player.is_turn = !player.is_turn;
            }
            self.players[mover.index()].current_col = START_COLUMN;

            if let Some((winner, cells)) = find_win(&self.board) {
                self.players[winner.index()].score += 1;
                self.winner = Some(winner);
                self.winning_cells = cells;
                return Some(RoundEvent { winner });
            }
            return None;
        }

        let mover = self.current_player();
        if input.left {
            let player = &mut self.players[mover.index()];
            player.current_col = player.current_col.saturating_sub(1);
        } else if input.right {
            let player = &mut self.players[mover.index()];
            player.current_col = (player.current_col + 1).min(COLS - 1);
        } else if input.drop {
            let col = self.players[mover.index()].current_col;
            if self.is_valid_column(col) {
                if let Some(row) = self.next_open_row(col) {
                    let start_y = self.board_offset().y + SQUARE_SIZE / 2.0;
                    self.drop = Some(DropAnimation {
                        col,
                        row,
                        y: start_y,
                    });
                }
            }
        }
        None
    }
}

/// Scan the board for four in a row; returns the winner and the winning
/// cells in line order
pub fn find_win(board: &Board) -> Option<(PlayerId, Vec<(usize, usize)>)> {
    for r in 0..ROWS {
        for c in 0..COLS {
            let Some(player) = board[r][c] else {
                continue;
            };
            // Horizontal
            if c + 3 < COLS && (0..4).all(|i| board[r][c + i] == Some(player)) {
                return Some((player, (0..4).map(|i| (r, c + i)).collect()));
            }
            // Vertical
            if r + 3 < ROWS && (0..4).all(|i| board[r + i][c] == Some(player)) {
                return Some((player, (0..4).map(|i| (r + i, c)).collect()));
            }
            // Diagonal down-right
            if r + 3 < ROWS && c + 3 < COLS && (0..4).all(|i| board[r + i][c + i] == Some(player))
            {
                return Some((player, (0..4).map(|i| (r + i, c + i)).collect()));
            }
            // Diagonal up-right
            if r >= 3 && c + 3 < COLS && (0..4).all(|i| board[r - i][c + i] == Some(player)) {
                return Some((player, (0..4).map(|i| (r - i, c + i)).collect()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn game() -> ConnectFourGame {
        let mut game = ConnectFourGame::new(bounds());
        game.set_starting_player(PlayerId::One);
        game
    }

    /// Drop a piece in `col` for whoever's turn it is and run the
    /// animation to completion
    fn drop_piece(game: &mut ConnectFourGame, col: usize) -> Option<RoundEvent> {
        let mover = game.current_player();
        game.players[mover.index()].current_col = col;
        let mut event = game.update(&TurnInput {
            drop: true,
            ..Default::default()
        });
        while game.drop.is_some() {
            event = event.or(game.update(&TurnInput::default()));
        }
        event
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut game = game();
        for _ in 0..10 {
            game.update(&TurnInput {
                left: true,
                ..Default::default()
            });
        }
        assert_eq!(game.players[0].current_col, 0);
        for _ in 0..10 {
            game.update(&TurnInput {
                right: true,
                ..Default::default()
            });
        }
        assert_eq!(game.players[0].current_col, COLS - 1);
    }

    #[test]
    fn test_drop_lands_and_passes_turn() {
        let mut game = game();
        assert!(drop_piece(&mut game, 3).is_none());
        assert_eq!(game.board[ROWS - 1][3], Some(PlayerId::One));
        assert_eq!(game.current_player(), PlayerId::Two);
        // Cursor recentered for the player who just moved
        assert_eq!(game.players[0].current_col, START_COLUMN);
    }

    #[test]
    fn test_pieces_stack() {
        let mut game = game();
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 0);
        assert_eq!(game.board[ROWS - 1][0], Some(PlayerId::One));
        assert_eq!(game.board[ROWS - 2][0], Some(PlayerId::Two));
    }

    #[test]
    fn test_full_column_rejects_drops() {
        let mut game = game();
        for _ in 0..ROWS {
            drop_piece(&mut game, 6);
        }
        assert!(!game.is_valid_column(6));
        let turn_before = game.current_player();
        drop_piece(&mut game, 6);
        // Nothing happened, same player's turn
        assert_eq!(game.current_player(), turn_before);
    }

    #[test]
    fn test_vertical_win() {
        let mut game = game();
        // One stacks column 0; Two wastes moves in column 6
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 6);
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 6);
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 6);
        let event = drop_piece(&mut game, 0);

        assert_eq!(event, Some(RoundEvent { winner: PlayerId::One }));
        assert_eq!(game.winner, Some(PlayerId::One));
        assert_eq!(game.scores(), (1, 0));
        assert_eq!(game.winning_cells.len(), 4);
        assert!(game.winning_cells.iter().all(|&(_, c)| c == 0));
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = game();
        for col in 0..3 {
            drop_piece(&mut game, col);
            drop_piece(&mut game, col + 4); // Two stays clear
        }
        let event = drop_piece(&mut game, 3);
        assert_eq!(event, Some(RoundEvent { winner: PlayerId::One }));
        assert!(game.winning_cells.iter().all(|&(r, _)| r == ROWS - 1));
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = game();
        // Build a staircase for One on columns 0..=3
        drop_piece(&mut game, 0); // One
        drop_piece(&mut game, 1); // Two
        drop_piece(&mut game, 1); // One
        drop_piece(&mut game, 2); // Two
        drop_piece(&mut game, 2); // One
        drop_piece(&mut game, 3); // Two
        drop_piece(&mut game, 2); // One
        drop_piece(&mut game, 3); // Two
        drop_piece(&mut game, 3); // One
        drop_piece(&mut game, 6); // Two
        let event = drop_piece(&mut game, 3); // One completes the diagonal

        assert_eq!(event, Some(RoundEvent { winner: PlayerId::One }));
        assert_eq!(game.winning_cells.len(), 4);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = game();
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 6);
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 6);
        drop_piece(&mut game, 0);
        drop_piece(&mut game, 6);
        drop_piece(&mut game, 0);
        assert!(game.winner.is_some());

        let board_before = game.board;
        drop_piece(&mut game, 5);
        assert_eq!(game.board, board_before);
    }

    #[test]
    fn test_restart_clears_board_keeps_scores() {
        let mut game = game();
        drop_piece(&mut game, 0);
        game.players[0].score = 2;
        game.restart();
        assert!(game.board.iter().flatten().all(|c| c.is_none()));
        assert_eq!(game.scores(), (2, 0));
        assert!(!game.players[0].is_turn && !game.players[1].is_turn);
    }

    #[test]
    fn test_drop_animation_advances_per_frame() {
        let mut game = game();
        game.update(&TurnInput {
            drop: true,
            ..Default::default()
        });
        let drop = game.drop.expect("a drop should be in flight");
        let start_y = drop.y;
        game.update(&TurnInput::default());
        let drop = game.drop.expect("still falling");
        assert_eq!(drop.y, start_y + 18.0);
        // The board is untouched until the piece lands
        assert!(game.board.iter().flatten().all(|c| c.is_none()));
    }
}
