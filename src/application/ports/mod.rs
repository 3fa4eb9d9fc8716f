mod scratch_store;
mod transcription_engine;

pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
