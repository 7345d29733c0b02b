//! Scroll-aware navigation bar
//!
//! The bar starts out transparent over the hero image and turns solid once
//! the page has scrolled past [`SCROLL_THRESHOLD`]. The state belongs to one
//! [`NavBar`] and changes only through [`NavBar::on_scroll`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::subscription::{ScrollSource, Subscription};

/// Offset, in layout units, above which the bar turns solid
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Presentational state of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    #[default]
    Transparent,
    Solid,
}

/// A change of [`NavState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: NavState,
    pub to: NavState,
}

/// Button look used for the bar's call to action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Default,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn--default",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Outline => "btn--outline",
            ButtonVariant::Ghost => "btn--ghost",
        }
    }
}

/// CSS classes applied for one nav state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub container: &'static str,
    pub brand: &'static str,
    pub link: &'static str,
    pub button: ButtonVariant,
}

const TRANSPARENT_STYLE: NavStyle = NavStyle {
    container: "nav--transparent",
    brand: "nav__brand--light",
    link: "nav__link--light",
    button: ButtonVariant::Secondary,
};

const SOLID_STYLE: NavStyle = NavStyle {
    container: "nav--solid",
    brand: "nav__brand--dark",
    link: "nav__link--dark",
    button: ButtonVariant::Default,
};

impl NavState {
    /// State for a vertical scroll offset. The threshold itself stays
    /// transparent; NaN is treated as the top of the page.
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavState::Solid
        } else {
            NavState::Transparent
        }
    }

    pub fn is_solid(self) -> bool {
        self == NavState::Solid
    }

    pub fn other(self) -> Self {
        match self {
            NavState::Transparent => NavState::Solid,
            NavState::Solid => NavState::Transparent,
        }
    }

    pub fn style(self) -> NavStyle {
        match self {
            NavState::Transparent => TRANSPARENT_STYLE,
            NavState::Solid => SOLID_STYLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavState::Transparent => "transparent",
            NavState::Solid => "solid",
        }
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type TransitionObserver = Box<dyn FnMut(Transition)>;

/// Navigation bar state machine
#[derive(Default)]
pub struct NavBar {
    state: NavState,
    observer: Option<TransitionObserver>,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `observer` once for every state change
    pub fn with_observer(mut self, observer: impl FnMut(Transition) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Recompute the state for `offset`, returning the transition if any
    pub fn on_scroll(&mut self, offset: f64) -> Option<Transition> {
        let next = NavState::for_offset(offset);
        if next == self.state {
            return None;
        }

        let transition = Transition {
            from: self.state,
            to: next,
        };
        self.state = next;
        if let Some(observer) = self.observer.as_mut() {
            observer(transition);
        }
        Some(transition)
    }

    /// Attach to `source`. The returned handle owns the subscription;
    /// dropping it detaches the bar.
    pub fn mount<S: ScrollSource>(self, source: S) -> MountedNavBar<S> {
        let nav = Rc::new(RefCell::new(self));
        let handler_nav = Rc::clone(&nav);
        let subscription = Subscription::new(
            source,
            Box::new(move |offset| {
                handler_nav.borrow_mut().on_scroll(offset);
            }),
        );
        MountedNavBar { nav, subscription }
    }
}

impl fmt::Debug for NavBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavBar")
            .field("state", &self.state)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// A [`NavBar`] attached to a scroll source
pub struct MountedNavBar<S: ScrollSource> {
    nav: Rc<RefCell<NavBar>>,
    subscription: Subscription<S>,
}

impl<S: ScrollSource> MountedNavBar<S> {
    pub fn state(&self) -> NavState {
        self.nav.borrow().state()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    /// Detach from the source and return the last state
    pub fn unmount(mut self) -> NavState {
        self.subscription.cancel();
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::ScrollBus;
    use proptest::prelude::*;

    fn recorder() -> (Rc<RefCell<Vec<Transition>>>, impl FnMut(Transition) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |t| sink.borrow_mut().push(t))
    }

    #[test]
    fn test_initial_state_is_transparent() {
        assert_eq!(NavBar::new().state(), NavState::Transparent);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(NavState::for_offset(50.0), NavState::Transparent);
        assert_eq!(NavState::for_offset(50.5), NavState::Solid);
        assert_eq!(NavState::for_offset(51.0), NavState::Solid);
        assert_eq!(NavState::for_offset(0.0), NavState::Transparent);
        assert_eq!(NavState::for_offset(-20.0), NavState::Transparent);
        assert_eq!(NavState::for_offset(f64::NAN), NavState::Transparent);
    }

    #[test]
    fn test_on_scroll_reports_only_changes() {
        let mut nav = NavBar::new();
        assert_eq!(nav.on_scroll(10.0), None);
        assert_eq!(
            nav.on_scroll(60.0),
            Some(Transition {
                from: NavState::Transparent,
                to: NavState::Solid
            })
        );
        assert_eq!(nav.on_scroll(500.0), None);
        assert_eq!(
            nav.on_scroll(50.0),
            Some(Transition {
                from: NavState::Solid,
                to: NavState::Transparent
            })
        );
    }

    #[test]
    fn test_scroll_down_and_back_sequence() {
        let (log, observer) = recorder();
        let bus = ScrollBus::new();
        let mounted = NavBar::new().with_observer(observer).mount(bus.clone());

        bus.dispatch(51.0);
        assert_eq!(mounted.state(), NavState::Solid);
        bus.dispatch(0.0);
        assert_eq!(mounted.state(), NavState::Transparent);

        let transitions = log.borrow();
        assert_eq!(
            *transitions,
            vec![
                Transition {
                    from: NavState::Transparent,
                    to: NavState::Solid
                },
                Transition {
                    from: NavState::Solid,
                    to: NavState::Transparent
                },
            ]
        );
    }

    #[test]
    fn test_unmount_stops_side_effects() {
        let (log, observer) = recorder();
        let bus = ScrollBus::new();
        let mounted = NavBar::new().with_observer(observer).mount(bus.clone());
        assert_eq!(bus.listener_count(), 1);

        let last = mounted.unmount();
        assert_eq!(last, NavState::Transparent);
        assert_eq!(bus.listener_count(), 0);

        assert_eq!(bus.dispatch(200.0), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_drop_detaches_listener() {
        let bus = ScrollBus::new();
        {
            let mounted = NavBar::new().mount(bus.clone());
            assert!(mounted.is_mounted());
        }
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_style_variants() {
        assert_eq!(NavState::Transparent.style().button, ButtonVariant::Secondary);
        assert_eq!(NavState::Solid.style().button, ButtonVariant::Default);
        assert_ne!(
            NavState::Transparent.style().container,
            NavState::Solid.style().container
        );
        assert_eq!(NavState::Solid.other(), NavState::Transparent);
    }

    proptest! {
        /// Property: the state depends only on which side of the threshold the offset is
        #[test]
        fn state_matches_threshold(offset in -1_000.0f64..100_000.0) {
            let expected = if offset > SCROLL_THRESHOLD {
                NavState::Solid
            } else {
                NavState::Transparent
            };
            prop_assert_eq!(NavState::for_offset(offset), expected);
        }

        /// Property: after any sequence of events the bar reflects the last offset
        #[test]
        fn last_offset_wins(offsets in prop::collection::vec(0.0f64..200.0, 1..50)) {
            let mut nav = NavBar::new();
            for offset in &offsets {
                nav.on_scroll(*offset);
            }
            let last = offsets[offsets.len() - 1];
            prop_assert_eq!(nav.state(), NavState::for_offset(last));
        }

        /// Property: reported transitions always alternate and never repeat a state
        #[test]
        fn transitions_alternate(offsets in prop::collection::vec(0.0f64..200.0, 1..50)) {
            let mut nav = NavBar::new();
            let mut previous = NavState::Transparent;
            for offset in offsets {
                if let Some(t) = nav.on_scroll(offset) {
                    prop_assert_eq!(t.from, previous);
                    prop_assert_ne!(t.from, t.to);
                    previous = t.to;
                }
            }
        }
    }
}
