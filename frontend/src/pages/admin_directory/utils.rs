use crate::api::{
    ApiError, EmployeePayload, EmployeeResponse, HeadPosition, HeadPositionKind,
    HeadPositionPayload, PositionPayload, PositionResponse,
};
use crate::pages::admin_directory::types::DirectorySave;

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub editing: Option<i64>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub position_id: Option<i64>,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &EmployeeResponse) -> Self {
        Self {
            editing: Some(employee.id),
            first_name: employee.first_name.clone(),
            middle_name: employee.middle_name.clone().unwrap_or_default(),
            last_name: employee.last_name.clone(),
            position_id: employee.position_id,
        }
    }

    pub fn to_save(&self) -> Result<DirectorySave, ApiError> {
        let first_name = required(&self.first_name, "First name is required.")?;
        let last_name = required(&self.last_name, "Last name is required.")?;
        let middle_name = Some(self.middle_name.trim().to_string()).filter(|m| !m.is_empty());
        Ok(DirectorySave::Employee(
            self.editing,
            EmployeePayload {
                first_name,
                middle_name,
                last_name,
                position_id: self.position_id,
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionFormState {
    pub editing: Option<i64>,
    pub name: String,
}

impl PositionFormState {
    pub fn from_position(position: &PositionResponse) -> Self {
        Self {
            editing: Some(position.id),
            name: position.name.clone(),
        }
    }

    pub fn to_save(&self) -> Result<DirectorySave, ApiError> {
        let name = required(&self.name, "Position name is required.")?;
        Ok(DirectorySave::Position(self.editing, PositionPayload { name }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadPositionFormState {
    pub editing: Option<i64>,
    pub name: String,
    pub title: String,
    pub kind: HeadPositionKind,
    pub chief_id: Option<i64>,
    /// Newly uploaded signature. `None` keeps whatever the API has.
    pub signature: Option<String>,
    pub has_signature: bool,
}

impl Default for HeadPositionFormState {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            title: String::new(),
            kind: HeadPositionKind::Chief,
            chief_id: None,
            signature: None,
            has_signature: false,
        }
    }
}

impl HeadPositionFormState {
    pub fn from_head(head: &HeadPosition) -> Self {
        Self {
            editing: Some(head.id),
            name: head.name.clone(),
            title: head.title.clone(),
            kind: head.kind,
            chief_id: head.chief_id,
            signature: None,
            has_signature: head.signature.is_some(),
        }
    }

    /// An OIC must name the chief it signs for; other kinds never carry one.
    pub fn to_save(&self) -> Result<DirectorySave, ApiError> {
        let name = required(&self.name, "Name is required.")?;
        let title = required(&self.title, "Title is required.")?;
        let chief_id = match self.kind {
            HeadPositionKind::Oic => Some(
                self.chief_id
                    .ok_or_else(|| ApiError::validation("Choose the chief this OIC signs for."))?,
            ),
            _ => None,
        };
        Ok(DirectorySave::HeadPosition(
            self.editing,
            HeadPositionPayload {
                name,
                title,
                kind: self.kind,
                chief_id,
                signature: self.signature.clone(),
            },
        ))
    }
}

/// Chiefs an OIC can be attached to, excluding soft-deleted ones.
pub fn active_chiefs(heads: &[HeadPosition]) -> Vec<&HeadPosition> {
    heads
        .iter()
        .filter(|head| head.kind == HeadPositionKind::Chief && head.deleted_at.is_none())
        .collect()
}

pub fn position_name(positions: &[PositionResponse], id: Option<i64>) -> String {
    id.and_then(|id| positions.iter().find(|position| position.id == id))
        .map(|position| position.name.clone())
        .unwrap_or_else(|| "-".to_string())
}
