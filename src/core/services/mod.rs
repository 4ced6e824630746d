pub mod recent_service;
pub mod time_format;
pub mod user_lookup;
