use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::motion::spring::{Spring, SpringConfig};

/// Where a scroll container sits relative to the scroll position, in the
/// scroll axis' coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub container_start: f64,
    pub container_end: f64,
}

impl ScrollMetrics {
    /// Metrics for a container tracked from "start start" to "end end": progress
    /// is 0 when its top meets the viewport top and 1 when its bottom meets the
    /// viewport bottom. `rect_top` is the container's top relative to the viewport,
    /// as reported by `getBoundingClientRect`.
    pub fn from_rect(scroll_y: f64, rect_top: f64, rect_height: f64, viewport_height: f64) -> Self {
        let container_start = scroll_y + rect_top;
        Self {
            offset: scroll_y,
            container_start,
            container_end: container_start + rect_height - viewport_height,
        }
    }

    /// Normalised progress in [0, 1]. A container that cannot scroll (end at or
    /// before start) reports 0.
    pub fn progress(&self) -> f64 {
        let range = self.container_end - self.container_start;
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        ((self.offset - self.container_start) / range).clamp(0.0, 1.0)
    }
}

type Listener = Rc<dyn Fn(f64)>;

struct Inner {
    value: Cell<f64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// A progress value in [0, 1] with observers.
///
/// Clones share the same value and subscriber list. Subscribers are called
/// synchronously, in subscription order, every time the value changes.
#[derive(Clone)]
pub struct ProgressSource {
    inner: Rc<Inner>,
}

impl PartialEq for ProgressSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ProgressSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSource {
    pub fn new() -> Self {
        Self::with_value(0.0)
    }

    pub fn with_value(value: f64) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: Cell::new(clamp_progress(value)),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> f64 {
        self.inner.value.get()
    }

    /// Recomputes progress from fresh scroll metrics.
    pub fn update(&self, metrics: ScrollMetrics) {
        self.set(metrics.progress());
    }

    pub fn set(&self, value: f64) {
        let value = clamp_progress(value);
        if value == self.inner.value.get() {
            return;
        }
        self.inner.value.set(value);

        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            source: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Keeps a listener attached to a [`ProgressSource`]. Dropping it detaches the
/// listener as well.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    source: Weak<Inner>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(inner) = self.source.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
        self.source = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Scroll progress passed through the scroll spring.
///
/// Follows its input source through a subscription; `tick` advances the spring
/// and publishes the result on [`SmoothedProgress::source`].
pub struct SmoothedProgress {
    spring: Rc<RefCell<Spring>>,
    output: ProgressSource,
    _input: Subscription,
}

impl SmoothedProgress {
    pub fn new(input: &ProgressSource) -> Self {
        Self::with_config(input, SpringConfig::SCROLL)
    }

    pub fn with_config(input: &ProgressSource, config: SpringConfig) -> Self {
        let spring = Rc::new(RefCell::new(Spring::new(config, input.get())));
        let follower = spring.clone();
        let subscription = input.subscribe(move |target| follower.borrow_mut().set_target(target));
        Self {
            spring,
            output: ProgressSource::with_value(input.get()),
            _input: subscription,
        }
    }

    pub fn source(&self) -> &ProgressSource {
        &self.output
    }

    #[cfg(test)]
    pub fn get(&self) -> f64 {
        self.output.get()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.borrow().is_at_rest()
    }

    /// Advances the spring by `dt_ms` and publishes the new value. Returns
    /// `true` while the spring is still moving.
    pub fn tick(&self, dt_ms: f64) -> bool {
        let (moving, position) = {
            let mut spring = self.spring.borrow_mut();
            let moving = spring.step(dt_ms);
            (moving, spring.position())
        };
        self.output.set(position);
        moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_the_container() {
        let metrics = |offset| ScrollMetrics {
            offset,
            container_start: 100.0,
            container_end: 300.0,
        };
        assert_eq!(metrics(0.0).progress(), 0.0);
        assert_eq!(metrics(100.0).progress(), 0.0);
        assert_eq!(metrics(200.0).progress(), 0.5);
        assert_eq!(metrics(300.0).progress(), 1.0);
        assert_eq!(metrics(900.0).progress(), 1.0);
    }

    #[test]
    fn a_container_that_cannot_scroll_reports_zero() {
        let metrics = ScrollMetrics {
            offset: 50.0,
            container_start: 0.0,
            container_end: 0.0,
        };
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn start_start_to_end_end_offsets() {
        // 3000px page, 1000px viewport, scrolled 1000px: the container top is
        // 1000px above the viewport.
        let metrics = ScrollMetrics::from_rect(1000.0, -1000.0, 3000.0, 1000.0);
        assert_eq!(metrics.container_start, 0.0);
        assert_eq!(metrics.container_end, 2000.0);
        assert_eq!(metrics.progress(), 0.5);

        let bottom = ScrollMetrics::from_rect(2000.0, -2000.0, 3000.0, 1000.0);
        assert_eq!(bottom.progress(), 1.0);
    }

    #[test]
    fn subscribers_see_every_change_in_order() {
        let source = ProgressSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            source.subscribe(move |p| seen.borrow_mut().push(("first", p)))
        };
        let second = {
            let seen = seen.clone();
            source.subscribe(move |p| seen.borrow_mut().push(("second", p)))
        };

        source.set(0.3);
        source.set(0.3);
        source.set(2.0);

        assert_eq!(
            *seen.borrow(),
            vec![("first", 0.3), ("second", 0.3), ("first", 1.0), ("second", 1.0)]
        );
        drop((first, second));
    }

    #[test]
    fn unsubscribe_detaches_the_listener() {
        let source = ProgressSource::new();
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            source.subscribe(move |_| calls.set(calls.get() + 1))
        };
        source.set(0.1);
        assert_eq!(source.subscriber_count(), 1);

        subscription.unsubscribe();
        source.set(0.2);
        assert_eq!(calls.get(), 1);
        assert_eq!(source.subscriber_count(), 0);

        {
            let calls = calls.clone();
            let _scoped = source.subscribe(move |_| calls.set(calls.get() + 1));
        }
        source.set(0.3);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscriptions_outliving_their_source_are_harmless() {
        let source = ProgressSource::new();
        let subscription = source.subscribe(|_| {});
        drop(source);
        subscription.unsubscribe();
    }

    #[test]
    fn smoothed_progress_lags_then_converges() {
        let raw = ProgressSource::new();
        let smoothed = SmoothedProgress::new(&raw);

        raw.set(0.8);
        assert_eq!(smoothed.get(), 0.0);

        smoothed.tick(16.0);
        let after_one_frame = smoothed.get();
        assert!(after_one_frame > 0.0 && after_one_frame < 0.8);

        let mut frames = 0;
        while smoothed.tick(16.0) {
            frames += 1;
            assert!(frames < 1_000);
        }
        assert!((smoothed.get() - raw.get()).abs() <= SpringConfig::SCROLL.rest_delta);
        assert!(smoothed.is_settled());
    }

    #[test]
    fn smoother_left_unticked_after_an_early_move_is_not_settled() {
        let raw = ProgressSource::new();
        let smoothed = SmoothedProgress::new(&raw);
        assert!(smoothed.is_settled());

        // First measurement lands before anything drives the frame loop
        raw.set(0.6);
        assert!(!smoothed.is_settled());
        assert_eq!(smoothed.get(), 0.0);

        while smoothed.tick(16.0) {}
        assert!((smoothed.get() - 0.6).abs() <= SpringConfig::SCROLL.rest_delta);
    }

    #[test]
    fn smoothed_progress_republishes_to_its_own_subscribers() {
        let raw = ProgressSource::new();
        let smoothed = SmoothedProgress::new(&raw);
        let last = Rc::new(Cell::new(-1.0));
        let _subscription = {
            let last = last.clone();
            smoothed.source().subscribe(move |p| last.set(p))
        };

        raw.set(1.0);
        while smoothed.tick(16.0) {}
        assert_eq!(last.get(), 1.0);
    }

    #[test]
    fn dropping_the_smoother_releases_its_input_subscription() {
        let raw = ProgressSource::new();
        let smoothed = SmoothedProgress::new(&raw);
        assert_eq!(raw.subscriber_count(), 1);
        drop(smoothed);
        assert_eq!(raw.subscriber_count(), 0);
    }
}
