//! Navigable menu: an ordered list of labeled actions plus a selection
//!
//! Every screen in the suite (main menu, pause, settings, ...) is one of
//! these values; screens differ only in their item list and in how the host
//! dispatches the activated action. Hit-testing against button rectangles
//! is the host's job, so the model stays renderer-agnostic.

/// Tint applied to an item's label when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTint {
    Default,
    PlayerOne,
    PlayerTwo,
}

/// A single menu entry
#[derive(Debug, Clone)]
pub struct MenuItem<A: Copy> {
    pub label: &'static str,
    pub action: A,
    pub tint: LabelTint,
}

impl<A: Copy> MenuItem<A> {
    pub fn new(label: &'static str, action: A) -> Self {
        Self {
            label,
            action,
            tint: LabelTint::Default,
        }
    }

    pub fn tinted(label: &'static str, action: A, tint: LabelTint) -> Self {
        Self {
            label,
            action,
            tint,
        }
    }
}

/// Ordered labeled actions with a movable selection
#[derive(Debug, Clone)]
pub struct Menu<A: Copy> {
    items: Vec<MenuItem<A>>,
    selected: usize,
}

impl<A: Copy> Menu<A> {
    pub fn new(items: Vec<MenuItem<A>>) -> Self {
        debug_assert!(!items.is_empty());
        Self { items, selected: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &MenuItem<A> {
        &self.items[self.selected]
    }

    /// Move the selection down, wrapping at the end
    pub fn scroll_down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Move the selection up, wrapping at the start
    pub fn scroll_up(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    /// Select the item under the cursor (on mouse motion)
    pub fn hover(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Mouse click: activates the already-selected item; a click on any
    /// other item only selects it
    pub fn click(&mut self, index: usize) -> Option<A> {
        if index >= self.items.len() {
            return None;
        }
        if index == self.selected {
            Some(self.items[index].action)
        } else {
            self.selected = index;
            None
        }
    }

    /// Keyboard confirm on the current selection
    pub fn confirm(&self) -> A {
        self.items[self.selected].action
    }

    /// Back to the first item (used when a screen is dismissed)
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        A,
        B,
        C,
    }

    fn menu() -> Menu<Action> {
        Menu::new(vec![
            MenuItem::new("a", Action::A),
            MenuItem::new("b", Action::B),
            MenuItem::new("c", Action::C),
        ])
    }

    #[test]
    fn test_scroll_wraps() {
        let mut m = menu();
        m.scroll_up();
        assert_eq!(m.selected(), 2);
        m.scroll_down();
        assert_eq!(m.selected(), 0);
        m.scroll_down();
        m.scroll_down();
        m.scroll_down();
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_confirm_returns_selected_action() {
        let mut m = menu();
        m.scroll_down();
        assert_eq!(m.confirm(), Action::B);
    }

    #[test]
    fn test_click_is_two_step() {
        let mut m = menu();
        // First click on an unselected item only selects it
        assert_eq!(m.click(2), None);
        assert_eq!(m.selected(), 2);
        // Second click activates
        assert_eq!(m.click(2), Some(Action::C));
        // Out of range is ignored
        assert_eq!(m.click(9), None);
    }

    #[test]
    fn test_hover_then_reset() {
        let mut m = menu();
        m.hover(1);
        assert_eq!(m.selected(), 1);
        m.hover(10); // ignored
        assert_eq!(m.selected(), 1);
        m.reset();
        assert_eq!(m.selected(), 0);
    }
}
