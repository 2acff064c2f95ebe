//! Avatar picture and frame references.

/// Public path prefix under which profile pictures and frames are served.
pub const PROFILE_PICTURES_PREFIX: &str = "/images/profilePictures/";

/// Validate an avatar image or frame reference.
///
/// References point at a static asset, e.g. `/images/profilePictures/pic1.jpeg`.
pub fn validate_avatar_ref(reference: &str) -> bool {
    let Some(file) = reference.strip_prefix(PROFILE_PICTURES_PREFIX) else {
        return false;
    };
    !file.is_empty()
        && file
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !file.contains("..")
}
