pub mod auth;
pub mod dashboard;
pub mod operator;
pub mod station;

pub use auth::*;
pub use dashboard::*;
pub use operator::*;
pub use station::*;
