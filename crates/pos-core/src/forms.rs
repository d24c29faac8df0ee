//! Form Validation
//!
//! Raw text as typed into the management and login screens, checked before
//! any request leaves the browser. Each `validate` returns the request body
//! to send, or the first failing rule's message.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{CategoryInput, MenuInput, MenuItem, ProfileUpdate, UserProfile};
use crate::error::ValidationError;
use crate::money::parse_decimal;

pub const MENU_FIELDS_REQUIRED: &str = "Semua field wajib diisi!";
pub const MENU_PRICE_INVALID: &str = "Harga harus angka lebih dari 0";
pub const CATEGORY_NAME_REQUIRED: &str = "Nama kategori tidak boleh kosong.";
pub const CATEGORY_CREATE_FAILED: &str = "Gagal menambahkan kategori. Coba lagi.";

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForm {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl MenuForm {
    /// Prefill for editing an existing menu
    pub fn from_menu(menu: &MenuItem) -> Self {
        Self {
            name: menu.name.clone(),
            price: menu.price.amount().normalize().to_string(),
            category: menu
                .category
                .as_ref()
                .map(|category| category.name().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<MenuInput, ValidationError> {
        let (Some(name), Some(price), Some(category)) =
            (required(&self.name), required(&self.price), required(&self.category))
        else {
            return Err(ValidationError::new(MENU_FIELDS_REQUIRED));
        };

        let price = parse_decimal(&price)
            .ok()
            .filter(|price| *price > Decimal::ZERO)
            .ok_or_else(|| ValidationError::new(MENU_PRICE_INVALID))?;

        Ok(MenuInput { name, price, category })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn validate(&self) -> Result<CategoryInput, ValidationError> {
        required(&self.name)
            .map(|name| CategoryInput { name })
            .ok_or_else(|| ValidationError::new(CATEGORY_NAME_REQUIRED))
    }
}

pub fn category_created_message(name: &str) -> String {
    format!("Kategori \"{}\" berhasil ditambahkan.", name)
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    #[default]
    Login,
    RegisterOwner,
    RegisterStaff,
}

impl AuthMode {
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::RegisterOwner, AuthMode::RegisterStaff];

    pub fn is_register(&self) -> bool {
        !matches!(self, AuthMode::Login)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::RegisterOwner => "Create Your Store",
            AuthMode::RegisterStaff => "Join Your Team",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to continue",
            AuthMode::RegisterOwner => "Register as a store owner",
            AuthMode::RegisterStaff => "Join with a referral code",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::RegisterOwner => "Owner",
            AuthMode::RegisterStaff => "Staff",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::RegisterOwner | AuthMode::RegisterStaff => "Create Account",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOwnerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub store_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStaffRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub referral_code: String,
}

/// A validated authentication call, ready to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthRequest {
    Login(LoginRequest),
    RegisterOwner(RegisterOwnerRequest),
    RegisterStaff(RegisterStaffRequest),
}

impl AuthRequest {
    /// Path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthRequest::Login(_) => "/auth/login",
            AuthRequest::RegisterOwner(_) => "/auth/register/owner",
            AuthRequest::RegisterStaff(_) => "/auth/register/staff",
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, AuthRequest::Login(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub store_name: String,
    pub referral_code: String,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Change mode; every field is cleared
    pub fn switch_mode(&mut self, mode: AuthMode) {
        *self = Self::new(mode);
    }

    pub fn validate(&self) -> Result<AuthRequest, ValidationError> {
        if self.mode == AuthMode::Login {
            let email = self.email.trim();
            if email.is_empty() || self.password.is_empty() {
                return Err(ValidationError::new("Email and password are required."));
            }
            return Ok(AuthRequest::Login(LoginRequest {
                email: email.to_string(),
                password: self.password.clone(),
            }));
        }

        let name = required(&self.name).ok_or_else(|| ValidationError::new("Name is required"))?;
        let email = required(&self.email).ok_or_else(|| ValidationError::new("Email is required"))?;
        if self.password.is_empty() {
            return Err(ValidationError::new("Password is required"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::new("Passwords do not match"));
        }
        let password = self.password.clone();

        match self.mode {
            AuthMode::RegisterOwner => {
                let store_name =
                    required(&self.store_name).ok_or_else(|| ValidationError::new("Store name is required"))?;
                Ok(AuthRequest::RegisterOwner(RegisterOwnerRequest { name, email, password, store_name }))
            }
            AuthMode::RegisterStaff | AuthMode::Login => {
                let referral_code = required(&self.referral_code)
                    .ok_or_else(|| ValidationError::new("Referral code is required"))?;
                Ok(AuthRequest::RegisterStaff(RegisterStaffRequest { name, email, password, referral_code }))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self { name: profile.name.clone(), email: profile.email.clone() }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        let name = required(&self.name).ok_or_else(|| ValidationError::new("Name is required"))?;
        let email = required(&self.email).ok_or_else(|| ValidationError::new("Email is required"))?;
        Ok(ProfileUpdate { name, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn menu_form(name: &str, price: &str, category: &str) -> MenuForm {
        MenuForm { name: name.into(), price: price.into(), category: category.into() }
    }

    #[test]
    fn test_menu_form_requires_every_field() {
        let err = menu_form("Soto", "", "Makanan").validate().unwrap_err();
        assert_eq!(err.to_string(), MENU_FIELDS_REQUIRED);
        let err = menu_form("  ", "15000", "Makanan").validate().unwrap_err();
        assert_eq!(err.to_string(), MENU_FIELDS_REQUIRED);
    }

    #[test]
    fn test_menu_form_price_rules() {
        for bad in ["abc", "0", "-500"] {
            let err = menu_form("Soto", bad, "Makanan").validate().unwrap_err();
            assert_eq!(err.to_string(), MENU_PRICE_INVALID, "price {:?}", bad);
        }
        let input = menu_form(" Soto ", "15000.50", "Makanan").validate().unwrap();
        assert_eq!(input.name, "Soto");
        assert_eq!(input.price, dec!(15000.50));
    }

    #[test]
    fn test_menu_form_prefill() {
        let menu = MenuItem::new("1", "Es Teh", 5000).with_category("Minuman");
        let form = MenuForm::from_menu(&menu);
        assert_eq!(form, menu_form("Es Teh", "5000", "Minuman"));
    }

    #[test]
    fn test_category_form() {
        let err = CategoryForm { name: "   ".into() }.validate().unwrap_err();
        assert_eq!(err.to_string(), CATEGORY_NAME_REQUIRED);

        let input = CategoryForm { name: " Minuman ".into() }.validate().unwrap();
        assert_eq!(input.name, "Minuman");
        assert_eq!(category_created_message(&input.name), "Kategori \"Minuman\" berhasil ditambahkan.");
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.email = "kasir@elaina.id".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Email and password are required.");

        form.password = "rahasia".into();
        let request = form.validate().unwrap();
        assert_eq!(request.endpoint(), "/auth/login");
        assert!(request.is_login());
    }

    #[test]
    fn test_register_rules_in_order() {
        let mut form = AuthForm::new(AuthMode::RegisterOwner);
        assert_eq!(form.validate().unwrap_err().to_string(), "Name is required");
        form.name = "Elaina".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Email is required");
        form.email = "owner@elaina.id".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Password is required");
        form.password = "abc".into();
        form.confirm_password = "abd".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Passwords do not match");
        form.confirm_password = "abc".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Store name is required");
        form.store_name = "Warung Elaina".into();

        let request = form.validate().unwrap();
        assert_eq!(request.endpoint(), "/auth/register/owner");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["storeName"], "Warung Elaina");
        assert!(json.get("confirmPassword").is_none());
    }

    #[test]
    fn test_staff_needs_referral_code() {
        let mut form = AuthForm::new(AuthMode::RegisterStaff);
        form.name = "Budi".into();
        form.email = "budi@elaina.id".into();
        form.password = "pw".into();
        form.confirm_password = "pw".into();
        assert_eq!(form.validate().unwrap_err().to_string(), "Referral code is required");

        form.referral_code = "ELA-123".into();
        let json = serde_json::to_value(form.validate().unwrap()).unwrap();
        assert_eq!(json["referralCode"], "ELA-123");
    }

    #[test]
    fn test_switch_mode_clears_fields() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.email = "a@b.c".into();
        form.password = "x".into();
        form.switch_mode(AuthMode::RegisterStaff);
        assert_eq!(form, AuthForm::new(AuthMode::RegisterStaff));
    }

    #[test]
    fn test_profile_form() {
        let form = ProfileForm { name: "Elaina".into(), email: "".into() };
        assert_eq!(form.validate().unwrap_err().to_string(), "Email is required");
    }
}
