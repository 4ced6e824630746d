pub mod audit;
pub mod console;
pub mod identity;
