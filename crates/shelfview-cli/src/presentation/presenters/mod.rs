pub mod dashboard;

pub use dashboard::present_dashboard;
