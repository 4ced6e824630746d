pub mod console_sender;
