use crate::api::{ApiClient, ApiError, UserPayload, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminUsersRepository {
    client: Rc<ApiClient>,
}

impl AdminUsersRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Active users first, soft-deleted ones after, each sorted by name.
    pub async fn fetch_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let mut users = self.client.list_users().await?;
        users.sort_by(|a, b| {
            a.deleted_at
                .is_some()
                .cmp(&b.deleted_at.is_some())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(users)
    }

    pub async fn save_user(
        &self,
        id: Option<i64>,
        payload: &UserPayload,
    ) -> Result<UserResponse, ApiError> {
        match id {
            Some(id) => self.client.update_user(id, payload).await,
            None => self.client.create_user(payload).await,
        }
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(id).await?;
        log::info!("user {} deactivated", id);
        Ok(())
    }
}
