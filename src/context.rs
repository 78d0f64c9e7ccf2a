//! Show context provider.
//!
//! Provides the [`Show`] controller to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // Rendering reads the signal
//! let handle = use_show();
//! let signal = handle.show();
//! let active = signal.read().deck().active();
//!
//! // Event handlers go through `act`, which catches the clock up first
//! handle.act(|show| show.follow_link());
//! ```

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use valentine_core::Show;

/// Shared show state plus the instant its clock started.
#[derive(Clone, Copy)]
pub struct ShowHandle {
    show: Signal<Show>,
    started: Instant,
}

impl ShowHandle {
    pub fn new(show: Signal<Show>, started: Instant) -> Self {
        Self { show, started }
    }

    /// The show signal, for rendering.
    pub fn show(&self) -> Signal<Show> {
        self.show
    }

    /// Real time since the show booted.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run timers that are due, then mutate the show.
    ///
    /// Input must see the same state the timers would have produced, so
    /// every handler advances the clock before acting.
    pub fn act<R>(&self, f: impl FnOnce(&mut Show) -> R) -> R {
        let now = self.elapsed();
        let mut signal = self.show;
        let mut show = signal.write();
        show.advance_to(now);
        f(&mut show)
    }
}

/// Hook to access the show from context.
pub fn use_show() -> ShowHandle {
    use_context::<ShowHandle>()
}
