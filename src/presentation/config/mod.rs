mod settings;

pub use settings::{
    CorsSettings, ServerSettings, Settings, TranscriptionSettings, UploadSettings,
};
