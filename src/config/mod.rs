mod dashboard_config;
mod errors;

pub use dashboard_config::DashboardConfig;
pub use errors::ConfigError;
