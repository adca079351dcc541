//! Custom `garde` rules shared by the request DTOs.

/// Message carried by [`present`] failures; the field name is prefixed when reported.
pub const MISSING_FIELD: &str = "is required";

/// Rejects absent or blank fields.
///
/// Other rules on an `Option` field only run when it is `Some`, so this is what makes
/// a field mandatory.
pub fn present(value: &Option<String>, _context: &()) -> garde::Result {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(garde::Error::new(MISSING_FIELD)),
    }
}
