pub mod bmr;
pub mod models;
pub mod session;
pub mod units;
pub mod weight_log;
pub mod workout;
