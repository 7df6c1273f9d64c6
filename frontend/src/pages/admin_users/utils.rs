use crate::api::{ApiError, Role, UserPayload, UserResponse};

pub const ROLE_OPTIONS: [Role; 3] = [Role::Admin, Role::Evaluator, Role::Guard];
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFormState {
    pub username: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            name: String::new(),
            password: String::new(),
            role: Role::Evaluator,
        }
    }
}

impl UserFormState {
    pub fn from_user(user: &UserResponse) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
            password: String::new(),
            role: user.role,
        }
    }

    /// A password is required when creating; when editing an empty one keeps the current password.
    pub fn to_payload(&self, creating: bool) -> Result<UserPayload, ApiError> {
        let username = self.username.trim();
        let name = self.name.trim();
        if username.is_empty() || name.is_empty() {
            return Err(ApiError::validation("Username and name are required."));
        }
        if self.role == Role::Unknown {
            return Err(ApiError::validation("Choose a role for this user."));
        }
        let password = match (self.password.is_empty(), creating) {
            (true, true) => return Err(ApiError::validation("A password is required for new users.")),
            (true, false) => None,
            (false, _) if self.password.chars().count() < MIN_PASSWORD_LENGTH => {
                return Err(ApiError::validation(format!(
                    "Passwords need at least {} characters.",
                    MIN_PASSWORD_LENGTH
                )))
            }
            (false, _) => Some(self.password.clone()),
        };
        Ok(UserPayload {
            username: username.to_string(),
            name: name.to_string(),
            role: self.role,
            password,
        })
    }
}
