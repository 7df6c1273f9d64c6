use crate::api::{
    EmployeePayload, EmployeeResponse, HeadPosition, HeadPositionPayload, PositionPayload,
    PositionResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryTab {
    #[default]
    Employees,
    Positions,
    HeadPositions,
}

impl DirectoryTab {
    pub const ALL: [DirectoryTab; 3] = [
        DirectoryTab::Employees,
        DirectoryTab::Positions,
        DirectoryTab::HeadPositions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DirectoryTab::Employees => "Employees",
            DirectoryTab::Positions => "Positions",
            DirectoryTab::HeadPositions => "Head positions",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            DirectoryTab::Employees => "employee",
            DirectoryTab::Positions => "position",
            DirectoryTab::HeadPositions => "head position",
        }
    }
}

/// A row the admin asked to soft delete.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEntry {
    Employee(EmployeeResponse),
    Position(PositionResponse),
    HeadPosition(HeadPosition),
}

impl DirectoryEntry {
    pub fn id(&self) -> i64 {
        match self {
            DirectoryEntry::Employee(employee) => employee.id,
            DirectoryEntry::Position(position) => position.id,
            DirectoryEntry::HeadPosition(head) => head.id,
        }
    }

    pub fn tab(&self) -> DirectoryTab {
        match self {
            DirectoryEntry::Employee(_) => DirectoryTab::Employees,
            DirectoryEntry::Position(_) => DirectoryTab::Positions,
            DirectoryEntry::HeadPosition(_) => DirectoryTab::HeadPositions,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            DirectoryEntry::Employee(employee) => employee.full_name(),
            DirectoryEntry::Position(position) => position.name.clone(),
            DirectoryEntry::HeadPosition(head) => head.name.clone(),
        }
    }
}

/// A validated create (`id == None`) or update ready to send.
#[derive(Debug, Clone)]
pub enum DirectorySave {
    Employee(Option<i64>, EmployeePayload),
    Position(Option<i64>, PositionPayload),
    HeadPosition(Option<i64>, HeadPositionPayload),
}

impl DirectorySave {
    pub fn is_update(&self) -> bool {
        match self {
            DirectorySave::Employee(id, _)
            | DirectorySave::Position(id, _)
            | DirectorySave::HeadPosition(id, _) => id.is_some(),
        }
    }

    pub fn tab(&self) -> DirectoryTab {
        match self {
            DirectorySave::Employee(..) => DirectoryTab::Employees,
            DirectorySave::Position(..) => DirectoryTab::Positions,
            DirectorySave::HeadPosition(..) => DirectoryTab::HeadPositions,
        }
    }
}
