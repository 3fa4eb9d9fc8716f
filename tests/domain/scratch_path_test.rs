use scribe::domain::{ScratchPath, sanitize_file_name};

#[test]
fn given_clean_name_when_building_scratch_path_then_name_is_preserved() {
    let path = ScratchPath::for_upload("my_clip.webm", 1699999999999);

    assert_eq!(path.as_str(), "1699999999999_my_clip.webm");
}

#[test]
fn given_unsafe_characters_when_sanitizing_then_they_become_underscores() {
    assert_eq!(sanitize_file_name("my audio!@#.wav"), "my_audio___.wav");
}

#[test]
fn given_path_traversal_attempt_when_sanitizing_then_separators_are_neutralized() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
}

#[test]
fn given_unsafe_name_when_building_scratch_path_then_extension_survives() {
    let path = ScratchPath::for_upload("später rec (1).m4a", 1700000000000);

    assert!(path.as_str().ends_with(".m4a"));
    assert!(
        path.as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    );
}

#[test]
fn given_same_name_different_timestamps_when_building_scratch_paths_then_paths_differ() {
    let first = ScratchPath::for_upload("clip.wav", 1699999999998);
    let second = ScratchPath::for_upload("clip.wav", 1699999999999);

    assert_ne!(first, second);
}
