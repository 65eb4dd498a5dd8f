//! Display-name sanitization.
//!
//! Toggle display names may contain `/` (they double as menu paths), but the
//! sanitized form keys on-disk animation artifacts, so separators are
//! stripped. Sanitization is total and idempotent.

/// Separator character stripped from sanitized names.
pub const NAME_SEPARATOR: char = '/';

/// Strip every separator from a display name.
pub fn sanitize(name: &str) -> String {
    name.chars().filter(|&c| c != NAME_SEPARATOR).collect()
}

/// Display name inferred from a scene object's name.
///
/// Underscores become separators so that `Hat_Straw` shows up as the nested
/// menu entry `Hat/Straw`.
pub fn display_name_for_object(object_name: &str) -> String {
    object_name.replace('_', "/")
}
