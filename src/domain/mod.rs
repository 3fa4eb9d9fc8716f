mod scratch_path;
mod upload;

pub use scratch_path::{ScratchPath, sanitize_file_name};
pub use upload::UploadedFile;
