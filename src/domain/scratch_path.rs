use std::fmt;

/// Filename of one request's temporary file inside the scratch directory.
///
/// Derived from the untrusted client-supplied name: every character outside
/// `[A-Za-z0-9_.-]` is replaced with `_`, and the receipt timestamp in
/// milliseconds is prefixed so concurrent uploads land on disjoint names.
/// The original extension survives sanitization, which lets the provider
/// infer the audio container format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPath(String);

impl ScratchPath {
    pub fn for_upload(original_name: &str, received_at_millis: u64) -> Self {
        Self(format!(
            "{}_{}",
            received_at_millis,
            sanitize_file_name(original_name)
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScratchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replaces every character outside `[A-Za-z0-9_.-]` with `_`, ruling out
/// path traversal and shell metacharacters in stored names.
pub fn sanitize_file_name(original: &str) -> String {
    original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
