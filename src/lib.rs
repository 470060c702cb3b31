pub mod cli;
pub mod config;
pub mod observability;
pub mod planner;

pub use config::Config;
pub use planner::Session;
