//! Owned slot for a single pending timer.
//!
//! `gloo-timers` handles cancel themselves when dropped, so cancelling a
//! schedule is just dropping the handle held here. Dropping the slot itself
//! cancels whatever is still pending.

#[derive(Debug)]
pub struct ScheduleSlot<H> {
    handle: Option<H>,
}

impl<H> ScheduleSlot<H> {
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Cancel the pending handle, then install the one built by `make`.
    ///
    /// The old handle is gone before `make` runs, so two schedules are never
    /// alive at the same time.
    pub fn install<F>(&mut self, make: F)
    where
        F: FnOnce() -> H,
    {
        self.cancel();
        self.handle = Some(make());
    }

    /// Drop the pending handle. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Default for ScheduleSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test handle that tracks how many instances are alive.
    pub(crate) struct LiveHandle(Rc<Cell<usize>>);

    impl LiveHandle {
        pub(crate) fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self(live.clone())
        }
    }

    impl Drop for LiveHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn install_replaces_previous_handle() {
        let live = Rc::new(Cell::new(0));
        let mut slot = ScheduleSlot::new();

        slot.install(|| LiveHandle::new(&live));
        slot.install(|| {
            // previous handle must already be gone
            assert_eq!(live.get(), 0);
            LiveHandle::new(&live)
        });
        assert_eq!(live.get(), 1);
        assert!(slot.is_active());

        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn dropping_slot_cancels() {
        let live = Rc::new(Cell::new(0));
        {
            let mut slot = ScheduleSlot::new();
            slot.install(|| LiveHandle::new(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }
}
