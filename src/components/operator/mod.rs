pub mod dashboard;

pub use dashboard::OperatorDashboard;
