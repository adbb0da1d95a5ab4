use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config;
use crate::motion::progress::{ProgressSource, ScrollMetrics, SmoothedProgress};

/// A callback that runs every `period_ms` until it asks to stop or the handle
/// is dropped.
///
/// The underlying interval is always released from a fresh task, never from
/// inside its own callback, so dropping the handle from anywhere (including a
/// render triggered by the tick itself) is safe. Ticks after a stop are ignored.
pub struct RepeatingTimer {
    slot: Rc<RefCell<Option<Interval>>>,
    active: Rc<Cell<bool>>,
}

impl RepeatingTimer {
    /// `tick` returns `false` once there is nothing left to animate.
    pub fn start<F>(period_ms: u32, mut tick: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        let slot: Rc<RefCell<Option<Interval>>> = Rc::default();
        let active = Rc::new(Cell::new(true));

        let interval = {
            let slot = Rc::downgrade(&slot);
            let active = active.clone();
            Interval::new(period_ms, move || {
                if !active.get() {
                    return;
                }
                if !tick() {
                    active.set(false);
                    release(&slot);
                }
            })
        };
        *slot.borrow_mut() = Some(interval);

        Self { slot, active }
    }

    pub fn is_running(&self) -> bool {
        self.active.get()
    }

}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.active.set(false);
        // Keep the interval alive until the deferred release below runs.
        let slot = self.slot.clone();
        Timeout::new(0, move || {
            slot.borrow_mut().take();
        })
        .forget();
    }
}

fn release(slot: &Weak<RefCell<Option<Interval>>>) {
    if let Some(slot) = slot.upgrade() {
        Timeout::new(0, move || {
            slot.borrow_mut().take();
        })
        .forget();
    }
}

fn read_metrics(window: &Window, container: &NodeRef) -> Option<ScrollMetrics> {
    let element = container.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics::from_rect(
        scroll_y,
        rect.top(),
        rect.height(),
        viewport_height,
    ))
}

/// Raw scroll progress of `container` through the window, from its top
/// reaching the viewport top to its bottom reaching the viewport bottom.
#[hook]
pub fn use_scroll_progress(container: NodeRef) -> ProgressSource {
    let source = use_memo(|_| ProgressSource::new(), ());

    {
        let source = (*source).clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let container = container.clone();
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let measure = {
                        let window = window.clone();
                        let source = source.clone();
                        let container = container.clone();
                        Closure::<dyn Fn()>::new(move || {
                            if let Some(metrics) = read_metrics(&window, &container) {
                                source.update(metrics);
                            }
                        })
                    };

                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, measure.as_ref().unchecked_ref())
                            .is_err()
                        {
                            gloo_console::error!("Failed to listen for", event);
                        }
                    }

                    // Initial measurement
                    match read_metrics(&window, &container) {
                        Some(metrics) => source.update(metrics),
                        None => log::warn!("scroll container not mounted; progress stays at 0"),
                    }

                    Box::new(move || {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                measure.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    log::warn!("no window available; scroll progress stays at 0");
                    Box::new(|| ())
                };
                move || destructor()
            },
            container,
        );
    }

    (*source).clone()
}

/// `raw` passed through the scroll spring. The spring only ticks while it has
/// somewhere to go; a change in `raw` wakes it up again.
#[hook]
pub fn use_smoothed_progress(raw: ProgressSource) -> ProgressSource {
    let smoothed = use_memo(|raw| SmoothedProgress::new(raw), raw.clone());

    {
        let smoothed = smoothed.clone();
        use_effect_with_deps(
            move |raw: &ProgressSource| {
                let frames: Rc<RefCell<Option<RepeatingTimer>>> = Rc::default();
                let settled = smoothed.is_settled();

                let wake = {
                    let frames = frames.clone();
                    move |_: f64| {
                        if frames
                            .borrow()
                            .as_ref()
                            .map_or(false, RepeatingTimer::is_running)
                        {
                            return;
                        }
                        let smoothed = smoothed.clone();
                        let mut last = Date::now();
                        let timer = RepeatingTimer::start(config::FRAME_INTERVAL_MS, move || {
                            let now = Date::now();
                            let moving = smoothed.tick(now - last);
                            last = now;
                            moving
                        });
                        *frames.borrow_mut() = Some(timer);
                    }
                };
                let subscription = raw.subscribe(wake.clone());
                // Raw progress may already have moved (first measurement) before
                // this subscription existed.
                if !settled {
                    wake(raw.get());
                }

                move || {
                    subscription.unsubscribe();
                    frames.borrow_mut().take();
                }
            },
            raw,
        );
    }

    smoothed.source().clone()
}

/// Current value of `source`, re-rendering the component whenever it changes.
/// The subscription lives exactly as long as the component.
#[hook]
pub fn use_progress(source: &ProgressSource) -> f64 {
    let value = use_state_eq(|| source.get());

    {
        let value = value.clone();
        use_effect_with_deps(
            move |source: &ProgressSource| {
                value.set(source.get());
                let subscription = source.subscribe(move |progress| value.set(progress));
                move || subscription.unsubscribe()
            },
            source.clone(),
        );
    }

    *value
}

/// Milliseconds since `running` last became true, updated every frame while it
/// stays true. Returns 0 while stopped.
#[hook]
pub fn use_frame_clock(running: bool) -> f64 {
    let elapsed = use_state_eq(|| 0.0_f64);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |running: &bool| {
                let timer = if *running {
                    let started = Date::now();
                    Some(RepeatingTimer::start(config::FRAME_INTERVAL_MS, move || {
                        elapsed.set(Date::now() - started);
                        true
                    }))
                } else {
                    elapsed.set(0.0);
                    None
                };
                move || drop(timer)
            },
            running,
        );
    }

    *elapsed
}
