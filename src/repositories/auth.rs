//! Login and signup against the auth and users endpoints

use async_trait::async_trait;
use tracing::info;

use crate::dto::{AuthResponseDto, LoginRequestDto, SignupRequestDto};
use crate::error::ApiError;
use crate::models::User;
use crate::traits::{ApiService, AuthRepository};

pub struct HttpAuthRepository<A> {
    api: A,
}

impl<A: ApiService> HttpAuthRepository<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: ApiService> AuthRepository for HttpAuthRepository<A> {
    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        info!("Logging in as {}", username);

        let request = LoginRequestDto { username, password };
        let response: AuthResponseDto = self.api.post("/auth/login", &request).await?;
        Ok(response.into_domain())
    }

    async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        info!("Creating user {}", username);

        // The demo API has no signup flow; creating a user is the closest match
        let request = SignupRequestDto {
            username,
            email,
            password,
        };
        let response: AuthResponseDto = self.api.post("/users/add", &request).await?;
        Ok(response.into_domain())
    }
}
