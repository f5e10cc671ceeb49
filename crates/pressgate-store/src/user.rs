//! User repository.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use pressgate_core::{AppError, AppResult};
use pressgate_entity::role::Role;
use pressgate_entity::user::{CreateUser, User};

/// Users keyed by ID, with an email index for login lookups.
///
/// Emails are normalized to lowercase so the uniqueness constraint is
/// case-insensitive.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: DashMap<Uuid, User>,
    by_email: DashMap<String, Uuid>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new, unverified user. Fails with a conflict when the email
    /// is already registered.
    pub fn create(&self, input: CreateUser) -> AppResult<User> {
        let email = normalize_email(&input.email);
        let id = Uuid::new_v4();

        // The entry guard holds the index shard lock, so two concurrent
        // registrations for the same email cannot both pass the check.
        match self.by_email.entry(email.clone()) {
            dashmap::Entry::Occupied(_) => {
                return Err(AppError::conflict(format!(
                    "Email '{email}' is already registered"
                )))
            }
            dashmap::Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let now = Utc::now();
        let user = User {
            id,
            name: input.name,
            email,
            password_hash: input.password_hash,
            kind: input.kind,
            is_verified: false,
            roles: input.roles,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    /// Number of registered users.
    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<User> {
        self.users.get(id).map(|u| u.clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.by_email.get(&normalize_email(email))?;
        self.find_by_id(&id)
    }

    /// Mark a user's email as verified.
    pub fn set_verified(&self, id: &Uuid) -> AppResult<User> {
        let mut user = self
            .users
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.is_verified = true;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    /// Record a successful login.
    pub fn record_login(&self, id: &Uuid) -> AppResult<User> {
        let mut user = self
            .users
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.last_login_at = Some(Utc::now());
        Ok(user.clone())
    }

    /// Replace a user's role assignments.
    pub fn set_roles(&self, id: &Uuid, roles: Vec<Role>) -> AppResult<User> {
        let mut user = self
            .users
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.roles = roles;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
