//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{PracticingLanguage, ProfileOptions, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    Age, Bio, Country, Email, Gender, Language, Proficiency, UserPassword, Username,
};
use crate::error::{UserError, UserResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> UserResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                email,
                password_hash,
                first_name,
                family_name,
                bio,
                profile_picture_url,
                native_language,
                practicing_language,
                practicing_proficiency,
                country,
                city,
                gender,
                age,
                registration_date,
                last_login_date,
                is_active,
                created_at,
                updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20
            )
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(&user.first_name)
        .bind(&user.family_name)
        .bind(user.bio.as_ref().map(Bio::as_str))
        .bind(&user.profile_picture_url)
        .bind(user.profile.native_language.as_str())
        .bind(user.profile.practicing_language.language.as_str())
        .bind(user.profile.practicing_language.proficiency.as_str())
        .bind(user.profile.country.as_str())
        .bind(&user.profile.city)
        .bind(user.profile.gender.as_str())
        .bind(user.profile.age.value())
        .bind(user.registration_date)
        .bind(user.last_login_date)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(classify_unique_violation)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&select_query("user_id = $1"))
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&select_query("email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&select_query("username = $1"))
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> UserResult<Option<User>> {
        // Email match is listed first so it wins when both collide
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{} ORDER BY (email = $1) DESC LIMIT 1",
            select_query("email = $1 OR username = $2")
        ))
        .bind(email.as_str())
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                password_hash = $4,
                first_name = $5,
                family_name = $6,
                bio = $7,
                profile_picture_url = $8,
                native_language = $9,
                practicing_language = $10,
                practicing_proficiency = $11,
                country = $12,
                city = $13,
                gender = $14,
                age = $15,
                last_login_date = $16,
                is_active = $17,
                updated_at = $18
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(&user.first_name)
        .bind(&user.family_name)
        .bind(user.bio.as_ref().map(Bio::as_str))
        .bind(&user.profile_picture_url)
        .bind(user.profile.native_language.as_str())
        .bind(user.profile.practicing_language.language.as_str())
        .bind(user.profile.practicing_language.proficiency.as_str())
        .bind(user.profile.country.as_str())
        .bind(&user.profile.city)
        .bind(user.profile.gender.as_str())
        .bind(user.profile.age.value())
        .bind(user.last_login_date)
        .bind(user.is_active)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(classify_unique_violation)?
        .rows_affected();

        // The row may have been deleted between fetch and write
        if updated == 0 {
            return Err(UserError::UserNotFound);
        }

        Ok(())
    }

    async fn delete_by_id(&self, user_id: &UserId) -> UserResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

fn select_query(predicate: &str) -> String {
    format!(
        r#"
        SELECT
            user_id,
            username,
            email,
            password_hash,
            first_name,
            family_name,
            bio,
            profile_picture_url,
            native_language,
            practicing_language,
            practicing_proficiency,
            country,
            city,
            gender,
            age,
            registration_date,
            last_login_date,
            is_active,
            created_at,
            updated_at
        FROM users
        WHERE {predicate}
        "#
    )
}

/// Map unique-index violations to the domain conflict variants. The
/// pre-checks in the use cases catch most duplicates; this covers the
/// race between the check and the write.
fn classify_unique_violation(err: sqlx::Error) -> UserError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return match db_err.constraint() {
                Some("users_email_key") => UserError::EmailTaken,
                Some("users_username_key") => UserError::UsernameTaken,
                _ => UserError::Database(err),
            };
        }
    }
    UserError::Database(err)
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    first_name: String,
    family_name: String,
    bio: Option<String>,
    profile_picture_url: String,
    native_language: String,
    practicing_language: String,
    practicing_proficiency: String,
    country: String,
    city: String,
    gender: String,
    age: i32,
    registration_date: DateTime<Utc>,
    last_login_date: Option<DateTime<Utc>>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> UserResult<User> {
        let corrupt =
            |field: &str| UserError::Internal(format!("Invalid {field} value in users row"));

        let password =
            UserPassword::from_phc_string(self.password_hash).map_err(|_| corrupt("password_hash"))?;
        let age = Age::new(self.age).map_err(|_| corrupt("age"))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            username: Username::from_db(self.username),
            email: Email::from_db(self.email),
            password,
            first_name: self.first_name,
            family_name: self.family_name,
            bio: self.bio.map(Bio::from_db),
            profile_picture_url: self.profile_picture_url,
            profile: ProfileOptions {
                native_language: Language::parse(&self.native_language)
                    .ok_or_else(|| corrupt("native_language"))?,
                practicing_language: PracticingLanguage {
                    language: Language::parse(&self.practicing_language)
                        .ok_or_else(|| corrupt("practicing_language"))?,
                    proficiency: Proficiency::parse(&self.practicing_proficiency)
                        .ok_or_else(|| corrupt("practicing_proficiency"))?,
                },
                country: Country::parse(&self.country).ok_or_else(|| corrupt("country"))?,
                city: self.city,
                gender: Gender::parse(&self.gender).ok_or_else(|| corrupt("gender"))?,
                age,
            },
            registration_date: self.registration_date,
            last_login_date: self.last_login_date,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
