//! User Entity
//!
//! The full user aggregate: account credentials plus the language-exchange
//! profile. The password hash never leaves this crate's boundary; the
//! public projection lives in the presentation layer.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    Age, Bio, Country, Email, Gender, Language, Proficiency, UserPassword, Username,
};

/// Default avatar assigned at registration.
pub const DEFAULT_PROFILE_PICTURE: &str = "default_profile.png";

/// The language the user is learning, with their self-assessed level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticingLanguage {
    pub language: Language,
    pub proficiency: Proficiency,
}

/// Language-exchange profile fields collected at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    pub native_language: Language,
    pub practicing_language: PracticingLanguage,
    pub country: Country,
    pub city: String,
    pub gender: Gender,
    pub age: Age,
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique login/display name
    pub username: Username,
    /// Unique, normalized (lowercased) email
    pub email: Email,
    /// Argon2 hash, never serialized outward
    pub password: UserPassword,
    pub first_name: String,
    pub family_name: String,
    pub bio: Option<Bio>,
    pub profile_picture_url: String,
    pub profile: ProfileOptions,
    /// When the account was registered
    pub registration_date: DateTime<Utc>,
    /// Last successful login time
    pub last_login_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at registration time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        username: Username,
        email: Email,
        password: UserPassword,
        first_name: String,
        family_name: String,
        bio: Option<Bio>,
        profile: ProfileOptions,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password,
            first_name,
            family_name,
            bio,
            profile_picture_url: DEFAULT_PROFILE_PICTURE.to_string(),
            profile,
            registration_date: now,
            last_login_date: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_date = Some(now);
        self.updated_at = now;
    }

    /// Apply a partial update. Absent fields keep their current value;
    /// the practicing language is replaced as a unit when present, so a
    /// caller cannot change the language without restating proficiency.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(family_name) = update.family_name {
            self.family_name = family_name;
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(url) = update.profile_picture_url {
            self.profile_picture_url = url;
        }
        if let Some(profile) = update.profile {
            if let Some(native_language) = profile.native_language {
                self.profile.native_language = native_language;
            }
            if let Some(practicing_language) = profile.practicing_language {
                self.profile.practicing_language = practicing_language;
            }
            if let Some(country) = profile.country {
                self.profile.country = country;
            }
            if let Some(city) = profile.city {
                self.profile.city = city;
            }
            if let Some(gender) = profile.gender {
                self.profile.gender = gender;
            }
            if let Some(age) = profile.age {
                self.profile.age = age;
            }
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update to the profile options block.
#[derive(Debug, Clone, Default)]
pub struct ProfileOptionsUpdate {
    pub native_language: Option<Language>,
    pub practicing_language: Option<PracticingLanguage>,
    pub country: Option<Country>,
    pub city: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<Age>,
}

/// Partial update to a user. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password: Option<UserPassword>,
    pub first_name: Option<String>,
    pub family_name: Option<String>,
    pub bio: Option<Bio>,
    pub profile_picture_url: Option<String>,
    pub profile: Option<ProfileOptionsUpdate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::RawPassword;

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
                    language: Language::Japanese,
                    proficiency: Proficiency::Beginner,
                },
                country: Country::Canada,
                city: "Toronto".to_string(),
                gender: Gender::Female,
                age: Age::new(30).unwrap(),
            },
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.profile_picture_url, DEFAULT_PROFILE_PICTURE);
        assert!(user.is_active);
        assert!(user.last_login_date.is_none());
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_record_login() {
        let mut user = sample_user();
        user.record_login();
        assert!(user.last_login_date.is_some());
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn test_apply_merges_shallowly() {
        let mut user = sample_user();
        user.apply(UserUpdate {
            bio: Some(Bio::new("Learning Japanese").unwrap()),
            profile: Some(ProfileOptionsUpdate {
                city: Some("Vancouver".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(user.bio.as_ref().unwrap().as_str(), "Learning Japanese");
        assert_eq!(user.profile.city, "Vancouver");
        // untouched nested fields survive
        assert_eq!(user.profile.country, Country::Canada);
        assert_eq!(
            user.profile.practicing_language.language,
            Language::Japanese
        );
    }

    #[test]
    fn test_apply_replaces_practicing_language_wholesale() {
        let mut user = sample_user();
        user.apply(UserUpdate {
            profile: Some(ProfileOptionsUpdate {
                practicing_language: Some(PracticingLanguage {
                    language: Language::Korean,
                    proficiency: Proficiency::Intermediate,
                }),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(user.profile.practicing_language.language, Language::Korean);
        assert_eq!(
            user.profile.practicing_language.proficiency,
            Proficiency::Intermediate
        );
    }
}
