pub mod recent;
pub mod record;
pub mod users;
