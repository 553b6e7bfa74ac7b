// src/state.rs
use std::sync::atomic::{AtomicBool, Ordering};

/// Marks that a prediction request is outstanding.
#[derive(Debug, Default)]
pub struct InFlight {
    active: AtomicBool,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Claims the flag. `None` if a request is already outstanding.
    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag: &self.active })
    }
}

/// Releases the flag on drop, whatever path the request took.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_holder_at_a_time() {
        let state = InFlight::new();
        let guard = state.try_begin();
        assert!(guard.is_some());
        assert!(state.is_active());
        assert!(state.try_begin().is_none());

        drop(guard);
        assert!(!state.is_active());
        assert!(state.try_begin().is_some());
    }
}
