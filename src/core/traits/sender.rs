use crate::core::models::message::Message;

/// Where command output goes. Called once per header, entry line or failure.
pub trait Sender {
    fn send(&self, message: &Message);
}
