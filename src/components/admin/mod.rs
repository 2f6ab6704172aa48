pub mod dashboard;
pub mod operators;
pub mod stations;

pub use dashboard::AdminDashboard;
pub use operators::OperatorsPage;
pub use stations::StationsPage;
