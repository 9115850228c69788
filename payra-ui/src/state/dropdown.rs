//! Dropdown Menu State
//!
//! Open/closed state for a hover-activated menu. Leaving the trigger or the
//! panel schedules a close after [`HOVER_CLOSE_DELAY`]; entering either one
//! again before it fires cancels the close, so moving the pointer across the
//! gap between them does not flicker the panel.

use leptos::*;
use std::cell::RefCell;
use std::time::Duration;

use super::timer::Timer;

/// Delay between the pointer leaving and the menu closing
pub const HOVER_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Storage for the menu's open flag
pub trait OpenFlag: Clone + 'static {
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
}

impl OpenFlag for RwSignal<bool> {
    fn is_open(&self) -> bool {
        self.get_untracked()
    }

    fn set_open(&self, open: bool) {
        self.set(open);
    }
}

/// Hover-intent dropdown with at most one pending close
pub struct DropdownMenu<F: OpenFlag, T: Timer> {
    open: F,
    timer: T,
    delay: Duration,
    pending_close: RefCell<Option<T::Pending>>,
}

impl<F: OpenFlag, T: Timer> DropdownMenu<F, T> {
    pub fn new(open: F, timer: T) -> Self {
        Self::with_delay(open, timer, HOVER_CLOSE_DELAY)
    }

    pub fn with_delay(open: F, timer: T, delay: Duration) -> Self {
        Self {
            open,
            timer,
            delay,
            pending_close: RefCell::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Pointer entered the trigger or the panel
    pub fn pointer_enter(&self) {
        self.cancel_pending_close();
        self.open.set_open(true);
    }

    /// Pointer left the trigger or the panel
    pub fn pointer_leave(&self) {
        let open = self.open.clone();
        let pending = self.timer.defer(self.delay, move || open.set_open(false));

        // Dropping the previous handle cancels it.
        self.pending_close.replace(Some(pending));
    }

    /// Click on the trigger. Leaves any pending close alone.
    pub fn toggle(&self) {
        self.open.set_open(!self.open.is_open());
    }

    /// Pointer pressed somewhere in the document
    pub fn pointer_down(&self, inside: bool) {
        if !inside && self.open.is_open() {
            self.open.set_open(false);
        }
    }

    #[cfg(test)]
    pub fn has_pending_close(&self) -> bool {
        self.pending_close.borrow().is_some()
    }

    /// Drop the pending close, if any. Called on unmount.
    pub fn cancel_pending_close(&self) {
        self.pending_close.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timer::manual::ManualTimer;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Flag(Rc<Cell<bool>>);

    impl OpenFlag for Flag {
        fn is_open(&self) -> bool {
            self.0.get()
        }

        fn set_open(&self, open: bool) {
            self.0.set(open);
        }
    }

    fn menu() -> (DropdownMenu<Flag, ManualTimer>, Flag, ManualTimer) {
        let flag = Flag::default();
        let timer = ManualTimer::default();
        let menu = DropdownMenu::new(flag.clone(), timer.clone());
        (menu, flag, timer)
    }

    #[test]
    fn test_enter_opens_and_leave_closes_after_delay() {
        let (menu, flag, timer) = menu();

        menu.pointer_enter();
        assert!(flag.is_open());

        menu.pointer_leave();
        assert!(menu.is_open());

        timer.advance(HOVER_CLOSE_DELAY - Duration::from_millis(1));
        assert!(menu.is_open());

        timer.advance(Duration::from_millis(1));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_reentry_cancels_close() {
        let (menu, _flag, timer) = menu();

        menu.pointer_enter();
        menu.pointer_leave();
        timer.advance(Duration::from_millis(100));
        menu.pointer_enter();

        assert!(!menu.has_pending_close());
        timer.advance(Duration::from_secs(1));
        assert!(menu.is_open());
    }

    #[test]
    fn test_rapid_leave_keeps_single_pending_close() {
        let (menu, _flag, timer) = menu();

        menu.pointer_enter();
        menu.pointer_leave();
        timer.advance(Duration::from_millis(100));
        menu.pointer_leave();
        assert_eq!(timer.scheduled(), 1);

        // The first close would have fired here.
        timer.advance(Duration::from_millis(100));
        assert!(menu.is_open());

        timer.advance(Duration::from_millis(50));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_toggles_regardless_of_hover() {
        let (menu, _flag, _timer) = menu();

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.pointer_enter();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_pointer_down_outside_closes() {
        let (menu, _flag, _timer) = menu();

        menu.pointer_enter();
        menu.pointer_down(true);
        assert!(menu.is_open());

        menu.pointer_down(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_pending_close_fires_without_teardown() {
        let (menu, _flag, timer) = menu();

        menu.pointer_enter();
        menu.pointer_leave();
        timer.advance(Duration::from_secs(1));

        assert!(!menu.is_open());
    }

    #[test]
    fn test_cancel_on_teardown() {
        // The component's event handlers keep the menu alive after unmount,
        // so only the explicit cancel may stop the close.
        let (menu, flag, timer) = menu();

        menu.pointer_enter();
        menu.pointer_leave();
        assert_eq!(timer.scheduled(), 1);

        menu.cancel_pending_close();
        assert_eq!(timer.scheduled(), 0);

        timer.advance(Duration::from_secs(1));
        assert!(flag.is_open());
        assert!(menu.is_open());
    }
}
