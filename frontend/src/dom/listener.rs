use crate::error::{SiteError, SiteResult};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

/// A `window` event listener that is removed when this value is dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> SiteResult<Self> {
        Self::register(event, handler, false)
    }

    /// Registers with `{ passive: true }`, for scroll and touch events.
    pub fn passive(event: &'static str, handler: impl FnMut() + 'static) -> SiteResult<Self> {
        Self::register(event, handler, true)
    }

    fn register(event: &'static str, handler: impl FnMut() + 'static, passive: bool) -> SiteResult<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}
