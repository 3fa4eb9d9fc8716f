mod health;
mod transcribe;

pub use health::health_handler;
pub use transcribe::{AUDIO_FIELD, ErrorResponse, TranscribeResponse, transcribe_handler};
