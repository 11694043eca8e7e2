//! Auto-advance policy and per-item timer ownership.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(10);
pub const HOVER_IMAGE_INTERVAL: Duration = Duration::from_secs(1);

/// What to do with a carousel's auto-advance timer after it moved or its
/// item count changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmDecision {
    /// Start a fresh countdown from `position`, replacing any running one.
    Arm { position: usize },
    Disarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvancePolicy {
    /// Auto-advance runs only when the item count exceeds this.
    pub threshold: usize,
    pub interval: Duration,
}

impl AutoAdvancePolicy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold, interval: AUTO_ADVANCE_INTERVAL }
    }

    pub fn is_armed(&self, total: usize) -> bool {
        total > self.threshold
    }

    /// Called on every move, manual or automatic, and on every count change.
    pub fn on_position(&self, position: usize, total: usize) -> ArmDecision {
        if self.is_armed(total) {
            ArmDecision::Arm { position }
        } else {
            ArmDecision::Disarm
        }
    }

    pub fn interval_millis(&self) -> u32 {
        u32::try_from(self.interval.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Timer handles keyed by the item they act on.
///
/// Handles are expected to cancel themselves on drop, so replacing or
/// removing an entry stops the old timer. Owners call [`TimerSlots::clear`]
/// on teardown.
#[derive(Debug)]
pub struct TimerSlots<K: Eq + Hash, H> {
    slots: HashMap<K, H>,
}

impl<K: Eq + Hash, H> Default for TimerSlots<K, H> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<K: Eq + Hash, H> TimerSlots<K, H> {
    /// Installs `handle` for `key`, dropping whatever timer was there.
    pub fn arm(&mut self, key: K, handle: H) {
        self.slots.insert(key, handle);
    }

    /// Applies `decision` to `key`. Arming always builds a new handle with
    /// `make`, so the old countdown is dropped even at the same position.
    pub fn apply(&mut self, key: K, decision: ArmDecision, make: impl FnOnce() -> H) {
        match decision {
            ArmDecision::Arm { .. } => self.arm(key, make()),
            ArmDecision::Disarm => {
                self.disarm(&key);
            }
        }
    }

    pub fn disarm(&mut self, key: &K) -> bool {
        self.slots.remove(key).is_some()
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{BRAND_STRIP_VISIBLE, CarouselController};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeTimer {
        name: &'static str,
        cancelled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let policy = AutoAdvancePolicy::new(5);
        assert!(!policy.is_armed(5));
        assert!(policy.is_armed(6));
        assert_eq!(policy.interval_millis(), 10_000);
    }

    #[test]
    fn rearming_cancels_previous_timer() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slots = TimerSlots::default();
        slots.arm("brands", FakeTimer { name: "first", cancelled: cancelled.clone() });
        slots.arm("brands", FakeTimer { name: "second", cancelled: cancelled.clone() });
        assert_eq!(*cancelled.borrow(), vec!["first"]);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn disarm_and_clear_cancel() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slots = TimerSlots::default();
        slots.arm(1_u64, FakeTimer { name: "one", cancelled: cancelled.clone() });
        slots.arm(2_u64, FakeTimer { name: "two", cancelled: cancelled.clone() });
        assert!(slots.disarm(&1));
        assert!(!slots.disarm(&1));
        assert_eq!(*cancelled.borrow(), vec!["one"]);
        slots.clear();
        assert!(slots.is_empty());
        assert_eq!(*cancelled.borrow(), vec!["one", "two"]);
    }

    #[test]
    fn manual_move_restarts_countdown() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let policy = AutoAdvancePolicy::new(BRAND_STRIP_VISIBLE);
        let mut controller = CarouselController::new(BRAND_STRIP_VISIBLE);
        controller.set_total(7);
        let mut slots = TimerSlots::default();

        let decision = policy.on_position(controller.start_index(), 7);
        assert_eq!(decision, ArmDecision::Arm { position: 0 });
        slots.apply("brands", decision, || FakeTimer { name: "at 0", cancelled: cancelled.clone() });

        controller.advance();
        let decision = policy.on_position(controller.start_index(), 7);
        assert_eq!(decision, ArmDecision::Arm { position: 1 });
        slots.apply("brands", decision, || FakeTimer { name: "at 1", cancelled: cancelled.clone() });

        assert_eq!(*cancelled.borrow(), vec!["at 0"]);
        assert!(slots.is_armed(&"brands"));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn shrinking_to_threshold_disarms() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let policy = AutoAdvancePolicy::new(BRAND_STRIP_VISIBLE);
        let mut slots = TimerSlots::default();
        slots.apply("brands", policy.on_position(2, 7), || FakeTimer { name: "running", cancelled: cancelled.clone() });

        let decision = policy.on_position(0, BRAND_STRIP_VISIBLE);
        assert_eq!(decision, ArmDecision::Disarm);
        slots.apply("brands", decision, || FakeTimer { name: "never built", cancelled: cancelled.clone() });

        assert!(!slots.is_armed(&"brands"));
        assert_eq!(*cancelled.borrow(), vec!["running"]);
    }

    #[test]
    fn single_listing_never_auto_advances() {
        let policy = AutoAdvancePolicy::new(1);
        assert_eq!(policy.on_position(0, 1), ArmDecision::Disarm);
        assert_eq!(policy.on_position(0, 0), ArmDecision::Disarm);
        assert_eq!(policy.on_position(1, 2), ArmDecision::Arm { position: 1 });
    }
}
