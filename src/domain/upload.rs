use super::ScratchPath;

/// A single request's stored upload.
///
/// Owned exclusively by the request that received it; the scratch file is
/// deleted on every exit path before the response is produced.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub path: ScratchPath,
    pub original_name: String,
    pub size_bytes: u64,
}
