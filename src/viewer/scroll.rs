//! Browser timers and animation frames for `GridView`.
//!
//! Includes the `setTimeout`-backed [`TimerScheduler`], the scroll settle
//! handler and the animation-frame handler that applies coalesced wheel input.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::{GridView, SharedState};
use crate::scroll::{TimerId, TimerScheduler};

/// `setTimeout`-backed scheduler.
///
/// A single persistent closure serves every timer; the timer id travels as
/// the timeout's argument.
pub(crate) struct BrowserTimers {
    next_id: u64,
    handles: HashMap<TimerId, i32>,
    callback: Option<Closure<dyn FnMut(JsValue)>>,
}

impl BrowserTimers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            handles: HashMap::new(),
            callback: None,
        }
    }

    fn forget(&mut self, id: TimerId) {
        self.handles.remove(&id);
    }
}

impl TimerScheduler for BrowserTimers {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn schedule(&mut self, delay_ms: f64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
            return id;
        };
        let delay = delay_ms.clamp(0.0, f64::from(i32::MAX)).round() as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_1(
            callback.as_ref().unchecked_ref(),
            delay,
            &JsValue::from_f64(id.0 as f64),
        ) {
            Ok(handle) => {
                self.handles.insert(id, handle);
            }
            Err(_) => log::warn!("failed to schedule timer {}", id.0),
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.remove(&id) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl GridView {
    /// Create the timer and animation-frame closures. They hold a weak
    /// reference so dropping the view frees the state.
    pub(crate) fn install_closures(state: &Rc<RefCell<SharedState>>) {
        let weak_state = Rc::downgrade(state);
        let timer_closure = Closure::wrap(Box::new(move |id: JsValue| {
            if let Some(state) = weak_state.upgrade() {
                GridView::handle_timer(&state, &id);
            }
        }) as Box<dyn FnMut(JsValue)>);

        let weak_state = Rc::downgrade(state);
        let frame_closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak_state.upgrade() {
                GridView::handle_animation_frame(&state);
            }
        }) as Box<dyn FnMut()>);

        let mut s = state.borrow_mut();
        s.timers.callback = Some(timer_closure);
        s.frame_closure = Some(frame_closure);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn handle_timer(state: &Rc<RefCell<SharedState>>, id: &JsValue) {
        let Some(raw) = id.as_f64() else {
            return;
        };
        let id = TimerId(raw as u64);
        let callback = {
            let mut s = state.borrow_mut();
            s.timers.forget(id);
            if !s.grid.on_timer(id) {
                return;
            }
            // Scrolling settled: overscan widens again, so redraw
            (s.render_callback.clone(), s.grid.scroll_state().offsets())
        };
        Self::invoke_render_callback(callback.0, callback.1);
    }

    pub(crate) fn request_frame(s: &mut SharedState) {
        if s.frame_requested {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(closure) = s.frame_closure.as_ref() else {
            return;
        };
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_ok()
        {
            s.frame_requested = true;
        }
    }

    pub(crate) fn handle_animation_frame(state: &Rc<RefCell<SharedState>>) {
        let moved = {
            let mut guard = state.borrow_mut();
            let s = &mut *guard;
            s.frame_requested = false;
            s.grid
                .on_animation_frame(&mut s.timers)
                .map(|offsets| (s.render_callback.clone(), offsets))
        };
        if let Some((callback, offsets)) = moved {
            Self::invoke_render_callback(callback, offsets);
        }
    }
}
