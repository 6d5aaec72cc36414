use async_trait::async_trait;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::sync::Arc;

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{Error, Result};
use crate::users::users_model::{NewUser, ProfileUpdate, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email regex is valid");
}

/// Lowercases and trims an email address.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::invalid_input("Please enter a valid email"))
    }
}

/// Checks a plain-text password before it is hashed.
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::invalid_input(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_field(message))
}

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.get_by_email(&normalize_email(email))
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        let name = new_user.name.trim().to_string();
        let email = normalize_email(&new_user.email);
        if name.is_empty() || email.is_empty() || new_user.password_hash.is_empty() {
            return Err(Error::missing_field("All fields are required"));
        }
        validate_email(&email)?;

        if self.repository.get_by_email(&email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        let user = self
            .repository
            .insert(NewUser {
                name,
                email,
                password_hash: new_user.password_hash,
            })
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::ConstraintViolation("Email already registered".to_string())
                } else {
                    e
                }
            })?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let name = required(update.name.clone(), "Name and email are required")?;
        let email = normalize_email(&required(
            update.email.clone(),
            "Name and email are required",
        )?);
        validate_email(&email)?;

        if let Some(existing) = self.repository.get_by_email(&email)? {
            if existing.id != user_id {
                return Err(Error::ConstraintViolation(
                    "Email is already in use".to_string(),
                ));
            }
        }

        let update = ProfileUpdate {
            name: Some(name),
            email: Some(email),
            phone: update.phone.map(|p| p.trim().to_string()),
            ..update
        };
        debug!("Updating profile for user {}", user_id);
        self.repository.update_profile(user_id, update).await.map_err(|e| {
            if e.is_record_not_found() {
                Error::not_found("User not found")
            } else if e.is_unique_violation() {
                Error::ConstraintViolation("Email is already in use".to_string())
            } else {
                e
            }
        })
    }

    async fn change_password(&self, user_id: &str, password_hash: String) -> Result<()> {
        if self.repository.get_by_id(user_id)?.is_none() {
            return Err(Error::not_found("User not found"));
        }
        self.repository
            .update_password_hash(user_id, password_hash)
            .await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id).await?;
        if deleted == 0 {
            return Err(Error::not_found("User not found"));
        }
        info!("Deleted user {} and all owned records", user_id);
        Ok(())
    }
}
