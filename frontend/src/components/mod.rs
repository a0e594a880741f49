pub mod reveal;
pub mod seen_once;

pub use reveal::{Reveal, RevealFrom};
pub use seen_once::use_seen_once;
