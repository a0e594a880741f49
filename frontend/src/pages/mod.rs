pub mod about;
pub mod contact;
pub mod hero;
pub mod services;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use services::Services;
