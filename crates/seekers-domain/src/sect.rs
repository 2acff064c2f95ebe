//! Sect naming rules.

/// Maximum sect name length in characters.
pub const SECT_NAME_MAX_LEN: usize = 40;

/// Validate a sect name: 1-40 characters after trimming, no `/`, no control
/// characters. Sect names appear as a path segment in `/sects/{sect}`.
pub fn validate_sect_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > SECT_NAME_MAX_LEN {
        return false;
    }
    !trimmed.chars().any(|c| c == '/' || c.is_control())
}
