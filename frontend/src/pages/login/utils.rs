use crate::api::{ApiError, LoginRequest};

pub fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Please enter your username."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password."));
    }
    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert!(validate_credentials("  ", "secret").is_err());
        assert!(validate_credentials("eva", "").is_err());
        let request = validate_credentials(" eva ", "secret").unwrap();
        assert_eq!(request.username, "eva");
    }
}
