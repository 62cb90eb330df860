use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use std::future::Future;

use super::sequence::{SharedSequence, Ticket};

/// Trailing-edge debounce: of all calls within `delay_ms`, only the last
/// one runs. Work that already started is not interrupted.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    sequence: SharedSequence,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            sequence: SharedSequence::new(),
        }
    }

    pub fn schedule<F, Fut>(&self, job: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let ticket = self.arm();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.delay_ms).await;
            if this.should_fire(ticket) {
                job().await;
            }
        });
    }

    /// Open a new window, superseding every pending call
    fn arm(&self) -> Ticket {
        self.sequence.begin()
    }

    /// Whether the call holding `ticket` is still the last one when its
    /// window closes
    fn should_fire(&self, ticket: Ticket) -> bool {
        self.sequence.is_latest(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_only_last_call_in_window_fires() {
        Owner::new().with(|| {
            let debouncer = Debouncer::new(300);
            let first = debouncer.arm();
            let second = debouncer.arm();
            let third = debouncer.arm();

            assert!(!debouncer.should_fire(first));
            assert!(!debouncer.should_fire(second));
            assert!(debouncer.should_fire(third));
        });
    }

    #[test]
    fn test_call_after_window_fires_again() {
        Owner::new().with(|| {
            let debouncer = Debouncer::new(300);
            let earlier = debouncer.arm();
            assert!(debouncer.should_fire(earlier));

            let later = debouncer.arm();
            assert!(debouncer.should_fire(later));
            assert!(!debouncer.should_fire(earlier));
        });
    }

    #[test]
    fn test_copies_share_one_window() {
        Owner::new().with(|| {
            let debouncer = Debouncer::new(300);
            let copy = debouncer;
            let from_original = debouncer.arm();
            let from_copy = copy.arm();

            assert!(!debouncer.should_fire(from_original));
            assert!(debouncer.should_fire(from_copy));
        });
    }
}
