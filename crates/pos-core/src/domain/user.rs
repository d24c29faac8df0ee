//! User Entity
//!
//! The logged-in account as returned by `GET /auth/profile`.

use serde::{Deserialize, Serialize};

use super::entity::opaque_id;

opaque_id!(
    /// Backend identifier of a user account
    UserId
);

/// Store owned or staffed by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,
    /// Code staff use to register under this store (owners only)
    #[serde(default)]
    pub referral_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub store: Option<StoreInfo>,
}

impl UserProfile {
    pub fn is_owner(&self) -> bool {
        self.role
            .as_deref()
            .map(|role| role.eq_ignore_ascii_case("owner"))
            .unwrap_or(false)
    }

    pub fn store_name(&self) -> &str {
        self.store.as_ref().map(|s| s.name.as_str()).unwrap_or("Elaina POS")
    }
}

/// `GET /auth/profile` response; `user` may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Body of `PUT /auth/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response() {
        let json = r#"{"user":{"id":1,"name":"Elaina","email":"elaina@example.com","role":"OWNER","store":{"name":"Warung Elaina","referralCode":"ELA-123"}}}"#;
        let profile = serde_json::from_str::<ProfileResponse>(json).unwrap().user.unwrap();
        assert!(profile.is_owner());
        assert_eq!(profile.store_name(), "Warung Elaina");
        assert_eq!(profile.store.unwrap().referral_code.as_deref(), Some("ELA-123"));
    }

    #[test]
    fn test_missing_user() {
        let response: ProfileResponse = serde_json::from_str("{}").unwrap();
        assert!(response.user.is_none());
    }
}
