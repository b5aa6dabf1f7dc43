mod foreign_month;
mod rate_config;
mod user_data;

pub use foreign_month::ForeignMonth;
pub use rate_config::RateConfig;
pub use user_data::UserData;
