pub mod telegram;
pub mod voice;

pub use telegram::{handle_update, send_reply, text_reply};
pub use voice::{incoming_call, speech_input};
