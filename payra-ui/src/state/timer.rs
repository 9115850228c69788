//! Deferred Actions
//!
//! A [`Timer`] runs an action once after a delay. The returned pending
//! handle cancels the action when dropped, so holding it in an `Option`
//! and overwriting gives cancel-and-replace for free.

use std::time::Duration;

/// Schedules one-shot deferred actions
pub trait Timer {
    /// Handle for a scheduled action; dropping it cancels the action
    type Pending;

    fn defer<F>(&self, delay: Duration, action: F) -> Self::Pending
    where
        F: FnOnce() + 'static;
}

/// Browser timer backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Pending = gloo_timers::callback::Timeout;

    fn defer<F>(&self, delay: Duration, action: F) -> Self::Pending
    where
        F: FnOnce() + 'static,
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, action)
    }
}
