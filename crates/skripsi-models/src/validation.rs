use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Usernames share the login identifier space with emails, so they may not
/// look like one.
pub fn not_email_like(value: &str) -> Result<(), ValidationError> {
    if value.contains('@') {
        return Err(ValidationError::new("email_like"));
    }
    Ok(())
}
