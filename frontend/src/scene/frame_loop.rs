use crate::error::{SiteError, SiteResult};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `on_frame` on every animation frame until stopped or dropped.
pub struct FrameLoop {
    frame: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

fn request(callback: &Closure<dyn FnMut()>) -> SiteResult<i32> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> SiteResult<Self> {
        let frame: FrameSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick = frame.clone();
        let next = pending.clone();
        *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            next.set(None);
            on_frame();
            if let Some(callback) = tick.borrow().as_ref() {
                match request(callback) {
                    Ok(id) => next.set(Some(id)),
                    Err(e) => log::warn!("Animation stopped: {}", e),
                }
            }
        }));

        let frame_loop = Self { frame, pending };
        let first = frame_loop.frame.borrow().as_ref().map(request);
        if let Some(id) = first.transpose()? {
            frame_loop.pending.set(Some(id));
        }
        Ok(frame_loop)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn stop(&self) {
        if let (Some(window), Some(id)) = (web_sys::window(), self.pending.take()) {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::debug!("cancel_animation_frame failed: {:?}", e);
            }
        }
        // Breaks the closure's reference to itself
        self.frame.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
