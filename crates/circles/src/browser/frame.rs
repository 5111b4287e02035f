//! `requestAnimationFrame` as a [`FrameHost`].

use std::cell::RefCell;
use std::rc::Rc;

use circles_core::{FrameHost, LoopError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Slot holding the closure every armed frame calls back into.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules frames with the window's display-refresh callback.
///
/// All armed frames call the same installed closure; the loop decides what
/// a callback means.
pub struct BrowserFrameHost {
    window: Window,
    callback: FrameCallback,
}

impl BrowserFrameHost {
    /// Create a host for the current window with no callback installed.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        Ok(Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        })
    }

    /// Install the closure armed frames invoke, replacing any previous one.
    pub fn set_callback(&self, closure: Closure<dyn FnMut()>) {
        *self.callback.borrow_mut() = Some(closure);
    }

    /// Drop the installed closure. Frames armed afterwards fail to schedule.
    pub fn clear_callback(&self) -> Option<Closure<dyn FnMut()>> {
        self.callback.borrow_mut().take()
    }

    /// Check if a callback is installed.
    pub fn has_callback(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl FrameHost for BrowserFrameHost {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32, LoopError> {
        let slot = self.callback.borrow();
        let closure = slot
            .as_ref()
            .ok_or_else(|| LoopError::Schedule("no frame callback installed".to_string()))?;
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| LoopError::Schedule(format!("requestAnimationFrame failed: {e:?}")))
    }

    fn cancel_frame(&mut self, handle: i32) {
        self.window.cancel_animation_frame(handle).ok();
    }
}
