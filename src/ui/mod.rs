//! Renderer-agnostic UI building blocks: the menu model and theme values

pub mod menu;
pub mod theme;

pub use menu::{LabelTint, Menu, MenuItem};
pub use theme::Theme;
