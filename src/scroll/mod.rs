//! Scroll state and the timing primitives around it.
//!
//! Includes the scroll state itself, the scroll-settle debounce and the
//! wheel frame gate. Everything here is clock-agnostic: time comes from a
//! [`TimerScheduler`] implementation.

mod frame;
mod state;
mod timer;

pub use frame::FrameGate;
pub use state::ScrollState;
pub use timer::{
    ManualScheduler, ScrollDebounce, TimerId, TimerScheduler, DEFAULT_SCROLL_DEBOUNCE_MS,
};
