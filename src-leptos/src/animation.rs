//! Count-up animation core
//!
//! Browser-independent pieces of the counter animation: the easing curve,
//! frame sampling, and the cancellable handle every frame write checks.

use crate::formatters::format_counter_label;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Length of one count-up run.
pub const COUNT_UP_DURATION: Duration = Duration::from_secs(2);

/// Delay between frames (~60fps).
pub const FRAME_INTERVAL_MS: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Apply easing to a progress value in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// One run from zero to `target`.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    easing: Easing,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: COUNT_UP_DURATION,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Rounded value shown `elapsed` after the run started. Never above target.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.is_complete(elapsed) {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = (self.target as f64 * self.easing.apply(progress)).round() as u64;
        value.min(self.target)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.duration.is_zero() || elapsed >= self.duration
    }
}

/// Liveness flag shared between a run and its owner.
///
/// Cancelling is idempotent; once cancelled the handle never becomes live again.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Arc<AtomicBool>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire)
    }
}

/// Drives a [`CountUp`] into a text sink, one frame per [`tick`](Self::tick).
pub struct CountUpTicker<F> {
    run: CountUp,
    handle: AnimationHandle,
    sink: F,
    last_written: Option<u64>,
}

impl<F: FnMut(String)> CountUpTicker<F> {
    pub fn new(run: CountUp, handle: AnimationHandle, sink: F) -> Self {
        Self {
            run,
            handle,
            sink,
            last_written: None,
        }
    }

    /// Write the frame for `elapsed`. Returns `false` once the run is over,
    /// either finished or cancelled; a cancelled run writes nothing.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.handle.is_live() {
            return false;
        }
        let value = self.run.value_at(elapsed);
        if self.last_written != Some(value) {
            (self.sink)(format_counter_label(value));
            self.last_written = Some(value);
        }
        !self.run.is_complete(elapsed)
    }
}

/// Visibility after a batch of intersection entries: the latest one wins.
///
/// `None` for an empty batch, meaning no change.
pub fn latest_visibility<I>(entries: I) -> Option<bool>
where
    I: IntoIterator<Item = bool>,
{
    entries.into_iter().last()
}

/// Owns the in-flight run of one counter and decides when to start another.
///
/// A run starts on every entry into view and on every target change while
/// visible. Leaving view cancels the run; a target change while hidden only
/// takes effect on the next entry.
#[derive(Debug, Default)]
pub struct RunSlot {
    current: Option<AnimationHandle>,
    last: Option<(bool, u64)>,
}

impl RunSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to the current `(visible, target)` pair. Returns the handle of
    /// a freshly started run, if one should start.
    pub fn retrigger(&mut self, visible: bool, target: u64) -> Option<AnimationHandle> {
        if self.last == Some((visible, target)) {
            return None;
        }
        self.last = Some((visible, target));
        self.cancel();
        if !visible {
            return None;
        }
        let handle = AnimationHandle::new();
        self.current = Some(handle.clone());
        Some(handle)
    }

    /// Cancel the in-flight run, if any. Used on unmount.
    pub fn cancel(&mut self) {
        if let Some(run) = self.current.take() {
            run.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(AnimationHandle::is_live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(Easing::EaseOutCubic.apply(0.0), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(1.0), 1.0);
        assert_eq!(Easing::EaseOutCubic.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(2.0), 1.0);
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_ease_out_cubic_decelerates() {
        let step = |t: f64| Easing::EaseOutCubic.apply(t + 0.1) - Easing::EaseOutCubic.apply(t);
        assert!(step(0.0) > step(0.4));
        assert!(step(0.4) > step(0.8));
    }

    #[test]
    fn test_value_reaches_target_at_duration() {
        let run = CountUp::new(12345);
        assert_eq!(run.value_at(Duration::ZERO), 0);
        assert_eq!(run.value_at(COUNT_UP_DURATION), 12345);
        assert_eq!(run.value_at(ms(5000)), 12345);
        assert!(run.is_complete(COUNT_UP_DURATION));
        assert!(!run.is_complete(ms(1999)));
    }

    #[test]
    fn test_value_monotonic_and_bounded() {
        for target in [1, 7, 100, 12345, 1_000_000] {
            let run = CountUp::new(target);
            let mut previous = 0;
            for step in 0..=250 {
                let value = run.value_at(ms(step * 10));
                assert!(value >= previous, "target {target} went backwards at {step}");
                assert!(value <= target, "target {target} overshot at {step}");
                previous = value;
            }
            assert_eq!(previous, target);
        }
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let run = CountUp::new(50).with_duration(Duration::ZERO);
        assert_eq!(run.value_at(Duration::ZERO), 50);
    }

    #[test]
    fn test_handle_cancel_is_idempotent() {
        let handle = AnimationHandle::new();
        let shared = handle.clone();
        assert!(handle.is_live());
        shared.cancel();
        shared.cancel();
        assert!(!handle.is_live());
    }

    #[test]
    fn test_ticker_full_run_ends_with_target_label() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let frames = frames.clone();
            move |text: String| frames.borrow_mut().push(text)
        };
        let mut ticker = CountUpTicker::new(CountUp::new(12345), AnimationHandle::new(), sink);

        let mut elapsed = 0;
        while ticker.tick(ms(elapsed)) {
            elapsed += u64::from(FRAME_INTERVAL_MS);
        }

        let frames = frames.borrow();
        assert_eq!(frames.first().map(String::as_str), Some("0+"));
        assert_eq!(frames.last().map(String::as_str), Some("12,345+"));
        assert!(frames.iter().all(|f| f.ends_with('+')));
    }

    #[test]
    fn test_ticker_zero_target_only_shows_zero() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let frames = frames.clone();
            move |text: String| frames.borrow_mut().push(text)
        };
        let mut ticker = CountUpTicker::new(CountUp::new(0), AnimationHandle::new(), sink);
        for step in 0..=130 {
            ticker.tick(ms(step * 16));
        }
        assert!(frames.borrow().iter().all(|f| f == "0+"));
    }

    #[test]
    fn test_ticker_cancelled_mid_run_stops_writing() {
        let writes = Rc::new(RefCell::new(0usize));
        let sink = {
            let writes = writes.clone();
            move |_: String| *writes.borrow_mut() += 1
        };
        let handle = AnimationHandle::new();
        let mut ticker = CountUpTicker::new(CountUp::new(10_000), handle.clone(), sink);

        assert!(ticker.tick(ms(0)));
        assert!(ticker.tick(ms(500)));
        let before = *writes.borrow();
        assert!(before > 0);

        handle.cancel();
        for step in 0..200 {
            assert!(!ticker.tick(ms(500 + step * 16)));
        }
        assert_eq!(*writes.borrow(), before);
    }

    #[test]
    fn test_latest_visibility_uses_last_entry() {
        assert_eq!(latest_visibility([true, false]), Some(false));
        assert_eq!(latest_visibility([false, true]), Some(true));
        assert_eq!(latest_visibility([true]), Some(true));
        assert_eq!(latest_visibility(Vec::<bool>::new()), None);
    }

    #[test]
    fn test_slot_hidden_at_mount_starts_nothing() {
        let mut slot = RunSlot::new();
        assert!(slot.retrigger(false, 500).is_none());
        assert!(!slot.is_running());
    }

    #[test]
    fn test_slot_each_entry_starts_one_run() {
        let mut slot = RunSlot::new();
        let first = slot.retrigger(true, 500).expect("entry starts a run");
        assert!(slot.is_running());

        // Same state again: no second run for the same entry.
        assert!(slot.retrigger(true, 500).is_none());
        assert!(first.is_live());

        // Leaving view cancels.
        assert!(slot.retrigger(false, 500).is_none());
        assert!(!first.is_live());
        assert!(!slot.is_running());

        // Re-entry starts a fresh run.
        let second = slot.retrigger(true, 500).expect("re-entry starts a run");
        assert!(second.is_live());
        assert!(!first.is_live());
    }

    #[test]
    fn test_slot_target_change_while_visible_restarts() {
        let mut slot = RunSlot::new();
        let first = slot.retrigger(true, 100).unwrap();
        let second = slot.retrigger(true, 200).expect("new target restarts");
        assert!(!first.is_live());
        assert!(second.is_live());
    }

    #[test]
    fn test_slot_target_change_while_hidden_waits_for_entry() {
        let mut slot = RunSlot::new();
        slot.retrigger(false, 100);
        assert!(slot.retrigger(false, 200).is_none());
        assert!(!slot.is_running());

        let run = slot.retrigger(true, 200).expect("entry starts a run");
        assert!(run.is_live());
    }

    #[test]
    fn test_slot_cancel_stops_sink_writes() {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let writes = writes.clone();
            move |text: String| writes.borrow_mut().push(text)
        };
        let mut slot = RunSlot::new();
        let handle = slot.retrigger(true, 10_000).unwrap();
        let mut ticker = CountUpTicker::new(CountUp::new(10_000), handle, sink);

        assert!(ticker.tick(ms(0)));
        assert!(ticker.tick(ms(400)));
        let written = writes.borrow().len();

        // Unmount path.
        slot.cancel();
        slot.cancel();
        for step in 0..150 {
            assert!(!ticker.tick(ms(400 + step * 16)));
        }
        assert_eq!(writes.borrow().len(), written);
        assert!(!slot.is_running());
    }
}
