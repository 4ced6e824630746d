pub mod command_result;
pub mod log_entry;
pub mod message;
pub mod page;
