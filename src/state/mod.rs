pub mod auth;
pub mod ui;

pub use auth::*;
pub use ui::*;
