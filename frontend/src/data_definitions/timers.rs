//! Component-owned timers. Dropping a [`TimerTask`] cancels it.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use common::auto_advance::TimerSlots;
use dioxus::core::Task;
use dioxus::prelude::*;

pub struct TimerTask(Task);

impl Drop for TimerTask {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(period: Duration) {
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

// desktop, mobile and server renders run inside a tokio runtime
#[cfg(not(target_arch = "wasm32"))]
async fn sleep(period: Duration) {
    tokio::time::sleep(period).await;
}

/// Runs `f` once after `delay`.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) -> TimerTask {
    TimerTask(spawn(async move {
        sleep(delay).await;
        f();
    }))
}

/// Runs `f` every `period` until dropped.
pub fn every(period: Duration, mut f: impl FnMut() + 'static) -> TimerTask {
    TimerTask(spawn(async move {
        loop {
            sleep(period).await;
            f();
        }
    }))
}

pub type SharedTimerSlots<K> = Rc<RefCell<TimerSlots<K, TimerTask>>>;

/// Timer slots that live as long as the calling component and are
/// cleared when it unmounts.
pub fn use_timer_slots<K: Eq + Hash + 'static>() -> SharedTimerSlots<K> {
    let slots = use_hook(|| Rc::new(RefCell::new(TimerSlots::default())));
    let on_drop = slots.clone();
    use_drop(move || on_drop.borrow_mut().clear());
    slots
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn native_sleep_waits_for_the_period() {
        let start = tokio::time::Instant::now();
        sleep(Duration::from_secs(10)).await;
        assert!(start.elapsed() >= Duration::from_secs(10));
    }
}
