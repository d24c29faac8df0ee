//! Authentication endpoints
//!
//! The backend sets and clears the session cookie; responses are only
//! checked for success.

use pos_core::domain::{ProfileResponse, ProfileUpdate, UserProfile};
use pos_core::forms::AuthRequest;
use pos_core::DomainResult;
use reqwest::Method;

use super::{send, RestClient};

impl RestClient {
    pub async fn authenticate(&self, request: &AuthRequest) -> DomainResult<()> {
        send(self.request(Method::POST, request.endpoint()).json(request)).await.map(drop)
    }

    pub async fn logout(&self) -> DomainResult<()> {
        send(self.request(Method::POST, "/auth/logout")).await.map(drop)
    }

    pub async fn fetch_profile(&self) -> DomainResult<Option<UserProfile>> {
        let response: ProfileResponse = self.get("/auth/profile").await?;
        Ok(response.user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> DomainResult<()> {
        self.put("/auth/profile", update).await
    }
}
