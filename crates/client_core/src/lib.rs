use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{OrderId, UserId},
    error::ErrorBody,
    protocol::{
        CreateOrderRequest, CreateUserRequest, UpdateOrderRequest, UpdateUserRequest, UserSummary,
    },
};
use thiserror::Error;
use tracing::debug;

pub mod validation;

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// 409 from the server: another user already owns the submitted email.
    #[error("email already registered")]
    Conflict,
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct DashboardClient {
    http: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiClientError> {
        let response = self
            .http
            .get(format!("{}/api/users", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        let users: Vec<UserSummary> = response.json().await?;
        debug!(count = users.len(), "fetched user collection");
        Ok(users)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, ApiClientError> {
        let response = self
            .http
            .get(format!("{}/api/users/email/{email}", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiClientError> {
        let response = self
            .http
            .post(format!("{}/api/users", self.base_url))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        debug!(email = %request.email, "created user");
        Ok(())
    }

    pub async fn update_user(
        &self,
        user_id: UserId,
        request: &UpdateUserRequest,
    ) -> Result<(), ApiClientError> {
        let response = self
            .http
            .patch(format!("{}/api/users/{}", self.base_url, user_id.0))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        debug!(user_id = user_id.0, "updated user");
        Ok(())
    }

    pub async fn delete_user(&self, user_id: UserId) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(format!("{}/api/users/{}", self.base_url, user_id.0))
            .send()
            .await?;
        check_status(response).await?;
        debug!(user_id = user_id.0, "deleted user");
        Ok(())
    }

    pub async fn create_order(
        &self,
        user_id: UserId,
        request: &CreateOrderRequest,
    ) -> Result<(), ApiClientError> {
        let response = self
            .http
            .post(format!("{}/api/users/{}/order", self.base_url, user_id.0))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        debug!(user_id = user_id.0, "created order");
        Ok(())
    }

    pub async fn update_order(
        &self,
        order_id: OrderId,
        request: &UpdateOrderRequest,
    ) -> Result<(), ApiClientError> {
        let response = self
            .http
            .patch(format!("{}/api/orders/{}", self.base_url, order_id.0))
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        debug!(order_id = order_id.0, "updated order");
        Ok(())
    }

    pub async fn delete_order(&self, order_id: OrderId) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(format!("{}/api/orders/{}", self.base_url, order_id.0))
            .send()
            .await?;
        check_status(response).await?;
        debug!(order_id = order_id.0, "deleted order");
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::CONFLICT {
        return Err(ApiClientError::Conflict);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    Err(ApiClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
