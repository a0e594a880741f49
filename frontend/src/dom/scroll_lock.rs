use crate::error::{SiteError, SiteResult};
use web_sys::HtmlElement;

/// Anything carrying an inline `overflow` style.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

impl OverflowStyle for HtmlElement {
    fn overflow(&self) -> String {
        self.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set overflow to {:?}: {:?}", value, e);
        }
    }
}

/// Keeps the page from scrolling while held. Releasing puts back exactly
/// the overflow value that was there when the lock was taken.
pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
    released: bool,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self {
            target,
            previous,
            released: false,
        }
    }

    #[cfg(test)]
    fn previous(&self) -> &str {
        &self.previous
    }

    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if !self.released {
            self.target.set_overflow(&self.previous);
            self.released = true;
        }
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn lock_body() -> SiteResult<ScrollLock<HtmlElement>> {
    let body = web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)?
        .body()
        .ok_or(SiteError::NoDocument)?;
    Ok(ScrollLock::acquire(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl OverflowStyle for FakeBody {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
            self.writes.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn restores_non_default_overflow() {
        let body = FakeBody::default();
        body.set_overflow("scroll");

        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), "hidden");
        assert_eq!(lock.previous(), "scroll");

        lock.release();
        assert_eq!(body.overflow(), "scroll");
    }

    #[test]
    fn drop_restores_and_release_is_single_shot() {
        let body = FakeBody::default();
        {
            let _lock = ScrollLock::acquire(body.clone());
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "");
        assert_eq!(*body.writes.borrow(), vec!["hidden".to_string(), String::new()]);
    }

    #[test]
    fn repeated_open_close_cycles_keep_original() {
        let body = FakeBody::default();
        body.set_overflow("auto");
        for _ in 0..3 {
            let lock = ScrollLock::acquire(body.clone());
            assert_eq!(body.overflow(), "hidden");
            drop(lock);
            assert_eq!(body.overflow(), "auto");
        }
    }
}
