//! User Endpoints

use async_trait::async_trait;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::User;

#[async_trait(?Send)]
pub trait UsersApi {
    /// `GET /users`
    async fn list_users(&self) -> ApiResult<Vec<User>>;
}

#[async_trait(?Send)]
impl UsersApi for HttpApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_data("/users", "Failed to load users").await
    }
}
