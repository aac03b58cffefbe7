//! Theme values
//!
//! A theme is an immutable value: switching color mode replaces the whole
//! value rather than mutating individual colors, so nothing can observe a
//! half-swapped palette.

use macroquad::prelude::Color;

use crate::games::PlayerId;

/// Colors for everything the suite draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// True for the white-on-black palette
    pub dark: bool,
    /// Playfield and screen background
    pub background: Color,
    /// Text, borders and the ball
    pub foreground: Color,
    /// Unselected menu labels
    pub dim: Color,
    /// Player one (left side)
    pub player_one: Color,
    /// Player two (right side)
    pub player_two: Color,
}

/// White-on-black, purple vs light blue
pub const DARK: Theme = Theme {
    dark: true,
    background: Color::new(0.0, 0.0, 0.0, 1.0),
    foreground: Color::new(1.0, 1.0, 1.0, 1.0),
    dim: Color::new(0.498, 0.498, 0.498, 1.0),
    player_one: Color::new(0.502, 0.0, 0.502, 1.0),
    player_two: Color::new(0.537, 0.812, 0.941, 1.0),
};

/// Black-on-white, red vs blue
pub const LIGHT: Theme = Theme {
    dark: false,
    background: Color::new(1.0, 1.0, 1.0, 1.0),
    foreground: Color::new(0.0, 0.0, 0.0, 1.0),
    dim: Color::new(0.498, 0.498, 0.498, 1.0),
    player_one: Color::new(1.0, 0.0, 0.0, 1.0),
    player_two: Color::new(0.0, 0.0, 1.0, 1.0),
};

impl Theme {
    pub fn from_mode(dark: bool) -> Theme {
        if dark { DARK } else { LIGHT }
    }

    /// The opposite color mode
    pub fn toggled(&self) -> Theme {
        Theme::from_mode(!self.dark)
    }

    pub fn player(&self, id: PlayerId) -> Color {
        match id {
            PlayerId::One => self.player_one,
            PlayerId::Two => self.player_two,
        }
    }

    /// Label for the settings button: the mode a toggle would switch to
    pub fn toggle_label(&self) -> &'static str {
        if self.dark { "Whitemode" } else { "Darkmode" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_whole_palette() {
        let theme = DARK;
        let light = theme.toggled();
        assert!(!light.dark);
        assert_eq!(light.background, LIGHT.background);
        assert_eq!(light.player_one, LIGHT.player_one);
        // Toggling back restores the starting value
        assert_eq!(light.toggled(), DARK);
    }

    #[test]
    fn test_toggle_label_names_target_mode() {
        assert_eq!(DARK.toggle_label(), "Whitemode");
        assert_eq!(LIGHT.toggle_label(), "Darkmode");
    }
}
