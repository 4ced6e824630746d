use colored::Colorize;

use crate::cli::output;
use crate::core::models::message::Message;
use crate::core::traits::sender::Sender;

/// Writes messages to the terminal: headers bold, entries on stdout,
/// failures on stderr.
pub struct ConsoleSender;

impl Sender for ConsoleSender {
    fn send(&self, message: &Message) {
        if message.is_failure() {
            output::error(&message.to_string());
            return;
        }

        match message {
            Message::Entry {
                index,
                elapsed,
                description,
            } => println!(
                "  {} -> {} {}",
                format!("#{index}").cyan(),
                format!("({elapsed} ago)").dimmed(),
                description
            ),
            header => output::header(&header.to_string()),
        }
    }
}
