//! Request Validation Chains
//!
//! Every request body passes through one of these before any business
//! logic runs. Failures collect into `FieldError`s rather than stopping
//! at the first problem, so a client sees everything wrong with the
//! payload at once. The limits themselves live in `kernel::rules` and
//! the value objects; this layer only translates raw wire shapes into
//! validated domain types.
//!
//! Two wire quirks are normalized here: an empty or whitespace-only
//! string counts as an absent optional field, and age may arrive as a
//! number or a numeric string.

use kernel::rules::{self, FieldError};

use crate::application::{LoginInput, RegisterInput, UpdateProfileInput};
use crate::domain::entity::{PracticingLanguage, ProfileOptions, ProfileOptionsUpdate};
use crate::domain::value_object::{
    Age, Bio, Country, Email, Gender, Language, Proficiency, RawPassword, Username,
};
use crate::presentation::dto::{
    AgeValue, LoginRequest, ProfileOptionsBody, RegisterRequest, UpdateRequest,
};

/// Normalize an optional string: trim, and treat empty as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collects field errors while individual checks produce values.
#[derive(Default)]
struct Errors(Vec<FieldError>);

impl Errors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    fn push_rejected(&mut self, field: &str, message: impl Into<String>, rejected: &str) {
        self.0
            .push(FieldError::new(field, message).with_rejected(rejected));
    }

    fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self.0)
        }
    }
}

fn check_username(raw: &str, errors: &mut Errors) -> Option<Username> {
    match Username::new(raw) {
        Ok(username) => Some(username),
        Err(e) => {
            errors.push_rejected("username", e.message(), raw.trim());
            None
        }
    }
}

fn check_email(raw: &str, errors: &mut Errors) -> Option<Email> {
    match Email::new(raw) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.push_rejected("email", e.message(), raw.trim());
            None
        }
    }
}

/// Password errors never echo the rejected value.
fn check_password(raw: &str, errors: &mut Errors) -> Option<RawPassword> {
    if raw.trim().is_empty() {
        errors.push("password", "Password is required");
        return None;
    }

    let len = raw.chars().count();
    if len < rules::PASSWORD_MIN_LEN || len > rules::PASSWORD_MAX_LEN {
        errors.push(
            "password",
            format!(
                "Password must be between {} and {} characters",
                rules::PASSWORD_MIN_LEN,
                rules::PASSWORD_MAX_LEN
            ),
        );
        return None;
    }

    match RawPassword::new(raw) {
        Ok(password) => Some(password),
        Err(e) => {
            errors.push("password", e.to_string());
            None
        }
    }
}

fn check_required_name(raw: &str, field: &str, message: &str, errors: &mut Errors) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_bio(raw: Option<String>, errors: &mut Errors) -> Option<Bio> {
    let raw = normalize(raw)?;
    match Bio::new(raw) {
        Ok(bio) => Some(bio),
        Err(e) => {
            errors.push("bio", e.message());
            None
        }
    }
}

fn check_language(
    raw: Option<String>,
    field: &str,
    required_message: &str,
    errors: &mut Errors,
) -> Option<Language> {
    let Some(raw) = normalize(raw) else {
        errors.push(field, required_message);
        return None;
    };
    match Language::parse(&raw) {
        Some(language) => Some(language),
        None => {
            errors.push_rejected(field, format!("{raw} is not a supported language"), &raw);
            None
        }
    }
}

fn check_proficiency(raw: Option<String>, field: &str, errors: &mut Errors) -> Option<Proficiency> {
    let Some(raw) = normalize(raw) else {
        errors.push(field, "Proficiency level is required");
        return None;
    };
    match Proficiency::parse(&raw) {
        Some(proficiency) => Some(proficiency),
        None => {
            errors.push_rejected(field, "Valid proficiency level is required", &raw);
            None
        }
    }
}

fn check_country(raw: Option<String>, errors: &mut Errors) -> Option<Country> {
    let field = "profileOptions.country";
    let Some(raw) = normalize(raw) else {
        errors.push(field, "Country is required");
        return None;
    };
    match Country::parse(&raw) {
        Some(country) => Some(country),
        None => {
            errors.push_rejected(field, format!("{raw} is not a supported country"), &raw);
            None
        }
    }
}

fn check_city(raw: Option<String>, errors: &mut Errors) -> Option<String> {
    let city = normalize(raw);
    if city.is_none() {
        errors.push("profileOptions.city", "City is required");
    }
    city
}

fn check_gender(raw: Option<String>, errors: &mut Errors) -> Option<Gender> {
    let field = "profileOptions.gender";
    let Some(raw) = normalize(raw) else {
        errors.push(field, "Gender is required");
        return None;
    };
    match Gender::parse(&raw) {
        Some(gender) => Some(gender),
        None => {
            errors.push_rejected(field, "Gender selection is required", &raw);
            None
        }
    }
}

/// Coerce and range-check the age. String values are accepted because
/// HTML form data arrives stringly typed.
fn check_age(raw: Option<AgeValue>, errors: &mut Errors) -> Option<Age> {
    let field = "profileOptions.age";

    let number = match raw {
        None => {
            errors.push(field, "Age is required");
            return None;
        }
        Some(AgeValue::Number(n)) => n,
        Some(AgeValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                errors.push(field, "Age is required");
                return None;
            }
            match trimmed.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    errors.push_rejected(field, "Valid age is required", trimmed);
                    return None;
                }
            }
        }
    };

    let in_range = i32::try_from(number).ok().and_then(|n| Age::new(n).ok());
    match in_range {
        Some(age) => Some(age),
        None => {
            errors.0.push(
                FieldError::new(
                    field,
                    format!(
                        "Age must be between {} and {}",
                        rules::AGE_MIN,
                        rules::AGE_MAX
                    ),
                )
                .with_rejected(number),
            );
            None
        }
    }
}

/// Validate a registration payload into use-case input.
pub fn validate_registration(req: RegisterRequest) -> Result<RegisterInput, Vec<FieldError>> {
    let mut errors = Errors::default();

    let username = check_username(&req.username, &mut errors);
    let email = check_email(&req.email, &mut errors);
    let password = check_password(&req.password, &mut errors);
    let first_name = check_required_name(
        &req.first_name,
        "firstName",
        "First name is required",
        &mut errors,
    );
    let family_name = check_required_name(
        &req.family_name,
        "familyName",
        "Family name is required",
        &mut errors,
    );
    let bio = check_bio(req.bio, &mut errors);

    let opts = req.profile_options;
    let native_language = check_language(
        opts.native_language,
        "profileOptions.nativeLanguage",
        "Native language is required",
        &mut errors,
    );
    let practicing = opts.practicing_language.unwrap_or_default();
    let practicing_language = check_language(
        practicing.language,
        "profileOptions.practicingLanguage.language",
        "Practicing language is required",
        &mut errors,
    );
    let proficiency = check_proficiency(
        practicing.proficiency,
        "profileOptions.practicingLanguage.proficiency",
        &mut errors,
    );
    let country = check_country(opts.country, &mut errors);
    let city = check_city(opts.city, &mut errors);
    let gender = check_gender(opts.gender, &mut errors);
    let age = check_age(opts.age, &mut errors);

    // Assemble only when every required field produced a value
    let input = match (
        username,
        email,
        password,
        first_name,
        family_name,
        native_language,
        practicing_language,
        proficiency,
        country,
        city,
        gender,
        age,
    ) {
        (
            Some(username),
            Some(email),
            Some(password),
            Some(first_name),
            Some(family_name),
            Some(native_language),
            Some(language),
            Some(proficiency),
            Some(country),
            Some(city),
            Some(gender),
            Some(age),
        ) => Some(RegisterInput {
            username,
            email,
            password,
            first_name,
            family_name,
            bio,
            profile: ProfileOptions {
                native_language,
                practicing_language: PracticingLanguage {
                    language,
                    proficiency,
                },
                country,
                city,
                gender,
                age,
            },
        }),
        _ => None,
    };

    match input {
        Some(input) => errors.finish(input),
        None => Err(errors.0),
    }
}

/// Validate a login payload. Only presence and email syntax; a password
/// that fails deeper policy simply will not verify.
pub fn validate_login(req: LoginRequest) -> Result<LoginInput, Vec<FieldError>> {
    let mut errors = Errors::default();

    let email = check_email(&req.email, &mut errors);
    if req.password.is_empty() {
        errors.push("password", "Password is required");
    }

    match email {
        Some(email) if errors.0.is_empty() => Ok(LoginInput {
            email,
            password: req.password,
        }),
        _ => Err(errors.0),
    }
}

/// Validate a partial update payload. Every field is optional, but a
/// provided field must pass the same rules as at registration.
pub fn validate_update(req: UpdateRequest) -> Result<UpdateProfileInput, Vec<FieldError>> {
    let mut errors = Errors::default();
    let mut input = UpdateProfileInput::default();

    if let Some(raw) = normalize(req.username) {
        input.username = check_username(&raw, &mut errors);
    }
    if let Some(raw) = normalize(req.email) {
        input.email = check_email(&raw, &mut errors);
    }
    if let Some(raw) = req.password.filter(|s| !s.trim().is_empty()) {
        input.password = check_password(&raw, &mut errors);
    }
    if let Some(raw) = normalize(req.first_name) {
        input.first_name = Some(raw);
    }
    if let Some(raw) = normalize(req.family_name) {
        input.family_name = Some(raw);
    }
    input.bio = check_bio(req.bio, &mut errors);
    if let Some(raw) = normalize(req.profile_picture_url) {
        input.profile_picture_url = Some(raw);
    }

    if let Some(opts) = req.profile_options {
        input.profile = Some(validate_profile_update(opts, &mut errors));
    }

    errors.finish(input)
}

fn validate_profile_update(opts: ProfileOptionsBody, errors: &mut Errors) -> ProfileOptionsUpdate {
    let mut update = ProfileOptionsUpdate::default();

    if normalize(opts.native_language.clone()).is_some() {
        update.native_language = check_language(
            opts.native_language,
            "profileOptions.nativeLanguage",
            "Native language is required",
            errors,
        );
    }

    // The practicing language replaces as a unit: sending either half
    // requires both, so language and level cannot drift apart.
    if let Some(practicing) = opts.practicing_language {
        let language = check_language(
            practicing.language,
            "profileOptions.practicingLanguage.language",
            "Practicing language is required",
            errors,
        );
        let proficiency = check_proficiency(
            practicing.proficiency,
            "profileOptions.practicingLanguage.proficiency",
            errors,
        );
        if let (Some(language), Some(proficiency)) = (language, proficiency) {
            update.practicing_language = Some(PracticingLanguage {
                language,
                proficiency,
            });
        }
    }

    if normalize(opts.country.clone()).is_some() {
        update.country = check_country(opts.country, errors);
    }
    if let Some(city) = normalize(opts.city) {
        update.city = Some(city);
    }
    if normalize(opts.gender.clone()).is_some() {
        update.gender = check_gender(opts.gender, errors);
    }
    if opts.age.is_some() {
        update.age = check_age(opts.age, errors);
    }

    update
}
