//! Username rules.

/// Maximum username length in characters.
pub const USERNAME_MAX_LEN: usize = 32;

/// Validate a username: 1-32 characters after trimming, no control characters.
///
/// Spaces inside the name are allowed ("Daoist Andy").
pub fn validate_username(username: &str) -> bool {
    let trimmed = username.trim();
    if trimmed.is_empty() || trimmed.chars().count() > USERNAME_MAX_LEN {
        return false;
    }
    !trimmed.chars().any(char::is_control)
}
