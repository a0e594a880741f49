//! Browser plumbing whose registrations are undone when dropped.

pub mod listener;
pub mod observer;
pub mod scroll_lock;

pub use listener::WindowListener;
pub use observer::{reaches_threshold, VisibilityObserver};
pub use scroll_lock::{OverflowStyle, ScrollLock};
