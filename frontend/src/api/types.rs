use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::records::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub position_id: Option<i64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl EmployeeResponse {
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().map(str::trim) {
            Some(middle) if !middle.is_empty() => {
                let initial: String = middle.chars().take(1).collect();
                format!("{} {}. {}", self.first_name, initial, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub position_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionPayload {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadPositionKind {
    Chief,
    Oic,
    RegionalDirector,
}

impl HeadPositionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadPositionKind::Chief => "chief",
            HeadPositionKind::Oic => "oic",
            HeadPositionKind::RegionalDirector => "regional_director",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeadPositionKind::Chief => "Chief",
            HeadPositionKind::Oic => "Officer-in-Charge",
            HeadPositionKind::RegionalDirector => "Regional Director",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "chief" => Some(HeadPositionKind::Chief),
            "oic" => Some(HeadPositionKind::Oic),
            "regional_director" => Some(HeadPositionKind::RegionalDirector),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadPosition {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub kind: HeadPositionKind,
    /// Chief an OIC signs for.
    #[serde(default)]
    pub chief_id: Option<i64>,
    /// Base64 data URL of the signature image.
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadPositionPayload {
    pub name: String,
    pub title: String,
    pub kind: HeadPositionKind,
    pub chief_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLogEntry {
    pub id: i64,
    #[serde(default)]
    pub user: Option<String>,
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    pub fn missing_identifier(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "MISSING_IDENTIFIER")
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR" || self.code == "MISSING_IDENTIFIER"
    }
}

/// Error body shapes the API is known to return.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default, alias = "message")]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub errors: Option<Value>,
}

impl ErrorBody {
    pub(crate) fn into_api_error(self, status: u16) -> ApiError {
        let code = self.code.unwrap_or_else(|| match status {
            401 => "UNAUTHORIZED".to_string(),
            404 => "NOT_FOUND".to_string(),
            422 => "VALIDATION_ERROR".to_string(),
            _ => format!("HTTP_{}", status),
        });
        ApiError {
            error: self
                .error
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
            code,
            details: self.errors.map(|errors| serde_json::json!({ "errors": errors })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn deserialize_login_response_role() {
        let raw = r#"{
            "token": "tok-1",
            "user": { "id": 7, "username": "eva", "name": "Eva Cruz", "role": "evaluator" }
        }"#;
        let lr: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(lr.token, "tok-1");
        assert_eq!(lr.user.role, Role::Evaluator);
        assert!(lr.user.deleted_at.is_none());
    }

    #[wasm_bindgen_test]
    fn serialize_user_payload_omits_empty_password() {
        let payload = UserPayload {
            username: "guard1".into(),
            name: "Gate Guard".into(),
            role: Role::Guard,
            password: None,
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["role"], serde_json::json!("guard"));
        assert!(v.get("password").is_none());
    }

    #[wasm_bindgen_test]
    fn employee_full_name_uses_middle_initial() {
        let employee = EmployeeResponse {
            id: 1,
            first_name: "Maria".into(),
            middle_name: Some("Santos".into()),
            last_name: "Reyes".into(),
            position_id: None,
            position: None,
            deleted_at: None,
        };
        assert_eq!(employee.full_name(), "Maria S. Reyes");
        let plain = EmployeeResponse {
            middle_name: Some("  ".into()),
            ..employee
        };
        assert_eq!(plain.full_name(), "Maria Reyes");
    }
}
