pub mod count_up;
pub mod latch;
pub mod panel;

pub use count_up::{CountUp, Stat, StatDisplay};
pub use latch::ViewLatch;
pub use panel::StatsPanel;
