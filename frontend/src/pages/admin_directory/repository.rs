use crate::api::{ApiClient, ApiError, EmployeeResponse, HeadPosition, PositionResponse};
use crate::pages::admin_directory::types::{DirectoryEntry, DirectorySave};
use std::rc::Rc;

#[derive(Clone)]
pub struct DirectoryRepository {
    client: Rc<ApiClient>,
}

impl DirectoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<EmployeeResponse>, ApiError> {
        let mut employees = self.client.list_employees().await?;
        employees.sort_by(|a, b| {
            (a.deleted_at.is_some(), a.last_name.to_lowercase(), a.first_name.to_lowercase()).cmp(&(
                b.deleted_at.is_some(),
                b.last_name.to_lowercase(),
                b.first_name.to_lowercase(),
            ))
        });
        Ok(employees)
    }

    pub async fn fetch_positions(&self) -> Result<Vec<PositionResponse>, ApiError> {
        let mut positions = self.client.list_positions().await?;
        positions.sort_by_key(|position| (position.deleted_at.is_some(), position.name.to_lowercase()));
        Ok(positions)
    }

    pub async fn fetch_head_positions(&self) -> Result<Vec<HeadPosition>, ApiError> {
        let mut heads = self.client.list_head_positions().await?;
        heads.sort_by_key(|head| (head.deleted_at.is_some(), head.kind.as_str(), head.name.to_lowercase()));
        Ok(heads)
    }

    pub async fn save(&self, save: &DirectorySave) -> Result<(), ApiError> {
        match save {
            DirectorySave::Employee(Some(id), payload) => {
                self.client.update_employee(*id, payload).await.map(drop)
            }
            DirectorySave::Employee(None, payload) => {
                self.client.create_employee(payload).await.map(drop)
            }
            DirectorySave::Position(Some(id), payload) => {
                self.client.update_position(*id, payload).await.map(drop)
            }
            DirectorySave::Position(None, payload) => {
                self.client.create_position(payload).await.map(drop)
            }
            DirectorySave::HeadPosition(Some(id), payload) => {
                self.client.update_head_position(*id, payload).await.map(drop)
            }
            DirectorySave::HeadPosition(None, payload) => {
                self.client.create_head_position(payload).await.map(drop)
            }
        }
    }

    pub async fn delete(&self, entry: &DirectoryEntry) -> Result<(), ApiError> {
        let id = entry.id();
        match entry {
            DirectoryEntry::Employee(_) => self.client.delete_employee(id).await?,
            DirectoryEntry::Position(_) => self.client.delete_position(id).await?,
            DirectoryEntry::HeadPosition(_) => self.client.delete_head_position(id).await?,
        }
        log::info!("{} {} archived", entry.tab().noun(), id);
        Ok(())
    }
}
