use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use yew::prelude::*;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop. Dropping the handle cancels the pending
/// frame and releases the closure.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// `on_frame` receives milliseconds since the first frame and returns
    /// whether another frame is wanted.
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let started_at = Cell::new(None::<f64>);
        let next_pending = pending.clone();
        let next_callback = callback.clone();
        let frame_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            next_pending.set(None);
            let start = started_at.get().unwrap_or(timestamp);
            started_at.set(Some(start));

            if !on_frame(timestamp - start) {
                return;
            }
            if let Some(cb) = next_callback.borrow().as_ref() {
                if let Ok(id) = frame_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    next_pending.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        pending.set(first);

        Some(Self { pending, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure's reference back to itself.
        self.callback.borrow_mut().take();
    }
}

/// Milliseconds elapsed since `running` last became true, refreshed every
/// animation frame. Stops once `limit_ms` is reached, if one is given.
#[hook]
pub fn use_frame_clock(running: bool, limit_ms: Option<f64>) -> f64 {
    let elapsed = use_state(|| 0.0_f64);
    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |running| {
                let frames = if *running {
                    FrameLoop::start(move |ms| {
                        let capped = limit_ms.map_or(ms, |limit| ms.min(limit));
                        elapsed.set(capped);
                        limit_ms.map_or(true, |limit| ms < limit)
                    })
                } else {
                    None
                };
                move || drop(frames)
            },
            running,
        );
    }
    *elapsed
}

/// Coarser clock for widgets that only change a few times a second.
#[hook]
pub fn use_interval_clock(period_ms: u32, epoch: u32) -> f64 {
    let elapsed = use_state(|| 0.0_f64);
    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                elapsed.set(0.0);
                let started = Date::now();
                let interval = Interval::new(period_ms, move || {
                    elapsed.set(Date::now() - started);
                });
                move || drop(interval)
            },
            (period_ms, epoch),
        );
    }
    *elapsed
}
