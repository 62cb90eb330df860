use serde::{Deserialize, Serialize};

use crate::domain::common::DomainError;

use super::account::{non_blank, Gender};

/// Body of `POST /account/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /account/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegister {
    pub full_name: String,
    pub password: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Raw registration form fields
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub password: String,
    pub email: String,
    pub address: String,
    pub birth_date: String,
    pub gender: String,
    pub phone_number: String,
}

impl UserRegister {
    /// Blank optional fields are sent as absent. Name, email and password
    /// are required; gender must be `Male` or `Female`.
    pub fn from_form(form: &RegisterForm) -> Result<Self, DomainError> {
        let full_name = form.full_name.trim();
        if full_name.is_empty() {
            return Err(DomainError::invalid_argument("Full name is required"));
        }
        let email = form.email.trim();
        if email.is_empty() {
            return Err(DomainError::invalid_argument("Email is required"));
        }
        if form.password.is_empty() {
            return Err(DomainError::invalid_argument("Password is required"));
        }
        let gender = Gender::from_code(&form.gender).ok_or_else(|| {
            DomainError::invalid_argument(format!("unknown gender: {}", form.gender))
        })?;

        Ok(Self {
            full_name: full_name.to_string(),
            password: form.password.clone(),
            email: email.to_string(),
            address: non_blank(&form.address),
            birth_date: non_blank(&form.birth_date),
            gender,
            phone_number: non_blank(&form.phone_number),
        })
    }
}

/// Answer of login and register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_omits_empty_optionals() {
        let body = UserRegister {
            full_name: "Ivan Petrov".to_string(),
            password: "secret1".to_string(),
            email: "ivan@example.com".to_string(),
            address: None,
            birth_date: Some("1990-05-01T00:00:00".to_string()),
            gender: Gender::Male,
            phone_number: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fullName"], "Ivan Petrov");
        assert_eq!(json["gender"], "Male");
        assert!(json.get("address").is_none());
        assert!(json.get("phoneNumber").is_none());
    }

    #[test]
    fn test_register_from_form() {
        let form = RegisterForm {
            full_name: " Ivan Petrov ".to_string(),
            password: "secret1".to_string(),
            email: "ivan@example.com".to_string(),
            gender: "Male".to_string(),
            phone_number: "  ".to_string(),
            ..RegisterForm::default()
        };
        let body = UserRegister::from_form(&form).unwrap();
        assert_eq!(body.full_name, "Ivan Petrov");
        assert_eq!(body.gender, Gender::Male);
        assert_eq!(body.phone_number, None);
        assert_eq!(body.address, None);

        let missing_gender = RegisterForm {
            gender: String::new(),
            ..form.clone()
        };
        assert!(UserRegister::from_form(&missing_gender).is_err());

        let missing_name = RegisterForm {
            full_name: "   ".to_string(),
            ..form
        };
        assert!(UserRegister::from_form(&missing_name).is_err());
    }
}
