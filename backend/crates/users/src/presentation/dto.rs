//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are permissive on purpose: every field deserializes
//! even when missing or mistyped, and the validation chains turn the
//! raw shapes into field-level errors instead of opaque 422s.

use serde::{Deserialize, Serialize};

use crate::domain::entity::User;

// ============================================================================
// Requests
// ============================================================================

/// Registration request. Required string fields default to empty so the
/// validation chain can report "is required" per field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_options: ProfileOptionsBody,
}

/// Nested profile options as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptionsBody {
    #[serde(default)]
    pub native_language: Option<String>,
    #[serde(default)]
    pub practicing_language: Option<PracticingLanguageBody>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<AgeValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticingLanguageBody {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub proficiency: Option<String>,
}

/// Age arrives either as a number or as a numeric string; clients have
/// historically sent both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Text(String),
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Partial profile update request. Absent keys leave fields unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub profile_options: Option<ProfileOptionsBody>,
}

// ============================================================================
// Responses
// ============================================================================

/// The outward-facing projection of a user. There is structurally no
/// password field here; forgetting to strip it is impossible.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub family_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub profile_picture_url: String,
    pub profile_options: PublicProfileOptions,
    pub registration_date: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileOptions {
    pub native_language: String,
    pub practicing_language: PublicPracticingLanguage,
    pub country: String,
    pub city: String,
    pub gender: String,
    pub age: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPracticingLanguage {
    pub language: String,
    pub proficiency: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            username: user.username.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            family_name: user.family_name.clone(),
            bio: user.bio.as_ref().map(|b| b.as_str().to_string()),
            profile_picture_url: user.profile_picture_url.clone(),
            profile_options: PublicProfileOptions {
                native_language: user.profile.native_language.as_str().to_string(),
                practicing_language: PublicPracticingLanguage {
                    language: user.profile.practicing_language.language.as_str().to_string(),
                    proficiency: user
                        .profile
                        .practicing_language
                        .proficiency
                        .as_str()
                        .to_string(),
                },
                country: user.profile.country.as_str().to_string(),
                city: user.profile.city.clone(),
                gender: user.profile.gender.as_str().to_string(),
                age: user.profile.age.value(),
            },
            registration_date: user.registration_date,
            last_login_date: user.last_login_date,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Payload returned by register and login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub user: PublicUser,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{PracticingLanguage, ProfileOptions};
    use crate::domain::value_object::{
        Age, Country, Email, Gender, Language, Proficiency, RawPassword, UserPassword, Username,
    };

    fn sample_user() -> User {
        let raw = RawPassword::new("hunter2x").unwrap();
        User::new(
            Username::new("alice99").unwrap(),
            Email::new("alice@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            "Alice".to_string(),
            "Smith".to_string(),
            None,
            ProfileOptions {
                native_language: Language::English,
                practicing_language: PracticingLanguage {
                    language: Language::Korean,
                    proficiency: Proficiency::UpperIntermediate,
                },
                country: Country::SouthKorea,
                city: "Seoul".to_string(),
                gender: Gender::NonBinary,
                age: Age::new(28).unwrap(),
            },
        )
    }

    #[test]
    fn test_public_user_has_no_password_key() {
        let user = sample_user();
        let json = serde_json::to_value(PublicUser::from(&user)).unwrap();

        let rendered = json.to_string();
        assert!(!rendered.contains("password"));
        assert!(!rendered.contains("passwordHash"));
    }

    #[test]
    fn test_public_user_wire_shape() {
        let user = sample_user();
        let json = serde_json::to_value(PublicUser::from(&user)).unwrap();

        assert_eq!(json["username"], "alice99");
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["profilePictureUrl"], "default_profile.png");
        assert_eq!(
            json["profileOptions"]["practicingLanguage"]["proficiency"],
            "Upper Intermediate"
        );
        assert_eq!(json["profileOptions"]["country"], "South Korea");
        assert_eq!(json["profileOptions"]["gender"], "Non-binary");
        // absent optionals are omitted, not null
        assert!(json.get("bio").is_none());
        assert!(json.get("lastLoginDate").is_none());
    }

    #[test]
    fn test_age_value_accepts_number_or_string() {
        let body: ProfileOptionsBody = serde_json::from_str(r#"{"age": 25}"#).unwrap();
        assert!(matches!(body.age, Some(AgeValue::Number(25))));

        let body: ProfileOptionsBody = serde_json::from_str(r#"{"age": "25"}"#).unwrap();
        assert!(matches!(body.age, Some(AgeValue::Text(ref s)) if s == "25"));
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.profile_options.age.is_none());
    }
}
