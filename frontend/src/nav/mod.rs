pub mod navbar;
pub mod sections;
pub mod state;

pub use navbar::Navbar;
pub use sections::{use_section_tracking, NavProvider};
