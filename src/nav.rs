use crate::section::Section;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClicked,
    OutsideClicked,
    ItemClicked,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::ToggleClicked) => Self::Open,
            (Self::Open, MenuEvent::ToggleClicked) => Self::Closed,
            (_, MenuEvent::OutsideClicked | MenuEvent::ItemClicked) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavStyle {
    #[default]
    Transparent,
    Elevated,
}

impl NavStyle {
    pub fn from_scroll(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Elevated
        } else {
            Self::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Transparent => "nav-transparent",
            Self::Elevated => "nav-elevated",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLayout {
    Mobile,
    Desktop,
}

impl NavLayout {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn shows_toggle(self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn shows_inline_links(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub style: NavStyle,
}

impl NavState {
    pub fn scrolled(self, offset: f64, threshold: f64) -> Self {
        Self {
            style: NavStyle::from_scroll(offset, threshold),
            ..self
        }
    }

    pub fn on_menu(self, event: MenuEvent) -> Self {
        Self {
            menu: self.menu.next(event),
            ..self
        }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled { offset, threshold } => self.scrolled(offset, threshold),
            NavAction::Menu(event) => self.on_menu(event),
            NavAction::Select(_) => self.on_menu(MenuEvent::ItemClicked),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled { offset: f64, threshold: f64 },
    Menu(MenuEvent),
    /// Clicking a section item; always closes the menu.
    Select(Section),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_opens_and_closes() {
        let open = MenuState::Closed.next(MenuEvent::ToggleClicked);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.next(MenuEvent::ToggleClicked), MenuState::Closed);
    }

    #[test]
    fn outside_click_and_item_click_close_the_menu() {
        assert_eq!(MenuState::Open.next(MenuEvent::OutsideClicked), MenuState::Closed);
        assert_eq!(MenuState::Open.next(MenuEvent::ItemClicked), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuEvent::OutsideClicked), MenuState::Closed);
    }

    #[test]
    fn style_elevates_strictly_past_threshold() {
        assert_eq!(NavStyle::from_scroll(0.0, 50.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_scroll(50.0, 50.0), NavStyle::Transparent);
        assert_eq!(NavStyle::from_scroll(50.5, 50.0), NavStyle::Elevated);
        assert_eq!(NavStyle::from_scroll(100.0, 50.0).class(), "nav-elevated");
    }

    #[test]
    fn scrolling_back_up_reverts_to_transparent() {
        let state = NavState::default().scrolled(120.0, 50.0).scrolled(10.0, 50.0);
        assert_eq!(state.style, NavStyle::Transparent);
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        assert_eq!(NavLayout::from_width(500.0, 768.0), NavLayout::Mobile);
        assert!(NavLayout::from_width(767.9, 768.0).shows_toggle());
        assert_eq!(NavLayout::from_width(768.0, 768.0), NavLayout::Desktop);
        assert!(NavLayout::from_width(1280.0, 768.0).shows_inline_links());
        assert!(!NavLayout::from_width(1280.0, 768.0).shows_toggle());
    }

    #[test]
    fn selecting_from_open_menu_closes_it_and_keeps_style() {
        let state = NavState::default()
            .scrolled(200.0, 50.0)
            .on_menu(MenuEvent::ToggleClicked);
        assert!(state.menu.is_open());

        let next = state.apply(NavAction::Select(Section::Skills));
        assert_eq!(next.menu, MenuState::Closed);
        assert_eq!(next.style, NavStyle::Elevated);
    }

    #[test]
    fn selecting_with_closed_menu_leaves_state_alone() {
        let next = NavState::default().apply(NavAction::Select(Section::Contact));
        assert_eq!(next, NavState::default());
    }

    #[test]
    fn scroll_actions_do_not_touch_the_menu() {
        let open = NavState::default().apply(NavAction::Menu(MenuEvent::ToggleClicked));
        let next = open.apply(NavAction::Scrolled {
            offset: 300.0,
            threshold: 50.0,
        });
        assert!(next.menu.is_open());
        assert_eq!(next.style, NavStyle::Elevated);
    }
}
