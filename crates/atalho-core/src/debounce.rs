#![forbid(unsafe_code)]

//! Cancellable debounce deadline.
//!
//! A [`Debounce`] tracks at most one pending deadline at a time. Arming a
//! new deadline with [`Debounce::schedule`] cancels whatever was pending,
//! so a burst of schedule calls collapses to a single firing once the
//! configured quiet period has elapsed.
//!
//! Each deadline carries a generation number. Callers stash the generation
//! returned by `schedule()` and compare it against the one reported by
//! [`Debounce::tick`]; a stale generation means the work it guarded was
//! superseded and must not publish.
//!
//! Time is advanced explicitly via `tick(Duration)` — there is no wall
//! clock here, which keeps firing order deterministic under test.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use atalho_core::debounce::Debounce;
//!
//! let mut debounce = Debounce::new(Duration::from_millis(200));
//! debounce.schedule();
//! let latest = debounce.schedule(); // first deadline is cancelled
//!
//! assert_eq!(debounce.tick(Duration::from_millis(100)), None);
//! assert_eq!(debounce.tick(Duration::from_millis(100)), Some(latest));
//! assert!(!debounce.is_pending());
//! ```

use std::time::Duration;

/// A single-slot debounce timer with generation-tagged deadlines.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    pending: Option<Pending>,
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    generation: u64,
    remaining: Duration,
}

impl Debounce {
    /// Create a debounce timer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            generation: 0,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm a new deadline, cancelling any pending one.
    ///
    /// Returns the generation of the newly armed deadline. A zero delay
    /// still fires on the next `tick`, never reentrantly within this call.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(Pending {
            generation: self.generation,
            remaining: self.delay,
        });
        self.generation
    }

    /// Cancel the pending deadline, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a deadline is armed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Generation of the armed deadline, if any.
    #[must_use]
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.map(|p| p.generation)
    }

    /// Advance time by `delta`.
    ///
    /// Returns `Some(generation)` when the armed deadline elapses within
    /// this tick; the deadline is consumed. At most one firing per call —
    /// there is never more than one deadline armed.
    pub fn tick(&mut self, delta: Duration) -> Option<u64> {
        let pending = self.pending.as_mut()?;
        if pending.remaining <= delta {
            let generation = pending.generation;
            self.pending = None;
            Some(generation)
        } else {
            pending.remaining -= delta;
            None
        }
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Schedule,
        Cancel,
        Tick(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Schedule),
            Just(Op::Cancel),
            (0u64..400).prop_map(Op::Tick),
        ]
    }

    proptest! {
        /// Whatever the interleaving, only the most recently scheduled
        /// generation may ever fire, and each generation fires at most
        /// once.
        #[test]
        fn only_latest_generation_fires(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut debounce = Debounce::new(Duration::from_millis(200));
            let mut latest = None;
            let mut fired = Vec::new();

            for op in ops {
                match op {
                    Op::Schedule => latest = Some(debounce.schedule()),
                    Op::Cancel => {
                        debounce.cancel();
                        latest = None;
                    }
                    Op::Tick(ms) => {
                        if let Some(generation) = debounce.tick(Duration::from_millis(ms)) {
                            prop_assert_eq!(Some(generation), latest);
                            prop_assert!(!fired.contains(&generation));
                            fired.push(generation);
                        }
                    }
                }
            }
        }
    }
}
