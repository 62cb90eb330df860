use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// `GET /account/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub address: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl UserProfile {
    /// Date part of the birth date, as a `date` input expects it
    pub fn birth_date_input(&self) -> String {
        self.birth_date
            .as_deref()
            .map(|value| value.split('T').next().unwrap_or(value).to_string())
            .unwrap_or_default()
    }
}

/// Body of `PUT /account/profile`. Email and gender are not editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEdit {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UserEdit {
    /// Edit model from form fields; blank fields are sent as absent
    pub fn from_form(
        full_name: &str,
        birth_date: &str,
        address: &str,
        phone_number: &str,
        gender: Option<Gender>,
    ) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            birth_date: non_blank(birth_date),
            gender,
            address: non_blank(address),
            phone_number: non_blank(phone_number),
        }
    }
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_api_json() {
        let json = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "fullName": "Anna Smirnova",
            "birthDate": "1995-07-21T00:00:00",
            "gender": "Female",
            "address": "5 Tverskaya street",
            "email": "anna@example.com",
            "phoneNumber": "+7 (900) 000-00-00"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.birth_date_input(), "1995-07-21");
    }

    #[test]
    fn test_edit_from_form() {
        let edit = UserEdit::from_form(" Anna ", "1995-07-21", "", "  ", Some(Gender::Female));
        assert_eq!(edit.full_name, "Anna");
        assert_eq!(edit.birth_date.as_deref(), Some("1995-07-21"));
        assert_eq!(edit.address, None);
        assert_eq!(edit.phone_number, None);
    }
}
