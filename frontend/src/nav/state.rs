use crate::config::{NAV_HIDE_OFFSET, NAV_SCROLLED_OFFSET};
use std::rc::Rc;
use yew::{Reducible, UseReducerHandle};

pub const DEFAULT_SECTION: &str = "#home";

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    /// Anchor of the section currently highlighted, e.g. `#about`.
    pub active: String,
    pub hidden: bool,
    pub scrolled: bool,
    pub menu_open: bool,
    pub last_scroll: f64,
}

pub type NavHandle = UseReducerHandle<NavState>;

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    SectionVisible(String),
    OpenMenu,
    CloseMenu,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
            hidden: false,
            scrolled: false,
            menu_open: false,
            last_scroll: 0.0,
        }
    }
}

impl NavState {
    pub fn apply(&self, action: NavAction) -> Self {
        let mut next = self.clone();
        match action {
            NavAction::Scrolled(offset) => {
                next.scrolled = offset > NAV_SCROLLED_OFFSET;
                if !self.menu_open {
                    next.hidden = offset > self.last_scroll && offset > NAV_HIDE_OFFSET;
                }
                next.last_scroll = offset;
            }
            NavAction::SectionVisible(anchor) => next.active = anchor,
            NavAction::OpenMenu => next.menu_open = true,
            NavAction::CloseMenu => next.menu_open = false,
        }
        next
    }

    pub fn is_active(&self, anchor: &str) -> bool {
        self.active == anchor
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_through(state: NavState, offsets: &[f64]) -> NavState {
        offsets
            .iter()
            .fold(state, |s, &o| s.apply(NavAction::Scrolled(o)))
    }

    #[test]
    fn starts_on_home_visible_and_closed() {
        let state = NavState::default();
        assert!(state.is_active("#home"));
        assert!(!state.hidden && !state.scrolled && !state.menu_open);
    }

    #[test]
    fn scrolled_flag_follows_offset() {
        let state = NavState::default();
        assert!(!state.apply(NavAction::Scrolled(50.0)).scrolled);
        assert!(state.apply(NavAction::Scrolled(51.0)).scrolled);
        let back = scroll_through(state, &[400.0, 10.0]);
        assert!(!back.scrolled);
    }

    #[test]
    fn scrolling_down_past_fold_hides_from_any_start() {
        for start in [0.0, 80.0, 100.0, 150.0, 3000.0] {
            let state = scroll_through(NavState::default(), &[start]);
            let down = state.apply(NavAction::Scrolled(start.max(100.0) + 20.0));
            assert!(down.hidden, "start {start}");
        }
    }

    #[test]
    fn scrolling_below_fold_never_hides() {
        let state = scroll_through(NavState::default(), &[20.0, 60.0, 99.0, 100.0]);
        assert!(!state.hidden);
    }

    #[test]
    fn scrolling_up_reveals_from_any_start() {
        for start in [150.0, 500.0, 3000.0] {
            let state = scroll_through(NavState::default(), &[start - 10.0, start]);
            assert!(state.hidden);
            let up = state.apply(NavAction::Scrolled(start - 1.0));
            assert!(!up.hidden, "start {start}");
        }
    }

    #[test]
    fn open_menu_suspends_hiding_but_tracks_offset() {
        let state = NavState::default().apply(NavAction::OpenMenu);
        let state = scroll_through(state, &[200.0, 400.0]);
        assert!(!state.hidden);
        assert!(state.scrolled);
        assert_eq!(state.last_scroll, 400.0);

        let closed = state.apply(NavAction::CloseMenu);
        assert!(!closed.menu_open);
        assert!(closed.apply(NavAction::Scrolled(450.0)).hidden);
        assert!(!closed.apply(NavAction::Scrolled(380.0)).hidden);
    }

    #[test]
    fn opening_the_menu_keeps_an_already_hidden_bar_frozen() {
        let hidden = scroll_through(NavState::default(), &[200.0, 300.0]);
        assert!(hidden.hidden);
        let open = hidden.apply(NavAction::OpenMenu).apply(NavAction::Scrolled(100.0));
        assert!(open.hidden);
    }

    #[test]
    fn last_visible_section_wins() {
        let state = NavState::default()
            .apply(NavAction::SectionVisible("#services".into()))
            .apply(NavAction::SectionVisible("#about".into()));
        assert!(state.is_active("#about"));
        assert!(!state.is_active("#services"));
    }
}
