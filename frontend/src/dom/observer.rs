use crate::error::SiteResult;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Ratios reported at a threshold crossing can land a hair under it.
const RATIO_TOLERANCE: f64 = 1e-3;

pub fn reaches_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// IntersectionObserver wrapper. The handler receives every reported entry
/// together with the observer, so it can stop observing from inside.
/// Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new(
        threshold: f64,
        mut handler: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> SiteResult<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        handler(&entry, &observer);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_requires_intersection() {
        assert!(!reaches_threshold(false, 1.0, 0.6));
        assert!(reaches_threshold(true, 0.6, 0.6));
        assert!(reaches_threshold(true, 0.5995, 0.6));
        assert!(!reaches_threshold(true, 0.55, 0.6));
        assert!(reaches_threshold(true, 1.0, 0.6));
    }
}
