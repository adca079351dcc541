use crate::server::{
    error::{internal::InternalError, AppError},
    model::user::Role,
};

/// Parses a stored role String into a `Role`
///
/// # Arguments
/// - `value` - The String to attempt to parse into `Role`
///
/// # Returns
/// - `Ok(Role)` - Successfully parsed String to `Role`
/// - `Err(AppError::InternalErr(ParseRole))` - The string does not name a known role
pub fn parse_role_from_string(value: String) -> Result<Role, AppError> {
    let result = value
        .parse::<Role>()
        .map_err(|_| InternalError::ParseRole { value })?;

    Ok(result)
}
