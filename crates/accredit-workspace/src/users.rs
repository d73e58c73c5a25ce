use accredit_core::models::user::{NewUser, Role, User};

use crate::error::WorkspaceError;
use crate::ids::{next_id, required};

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn create(&mut self, new: NewUser) -> Result<&User, WorkspaceError> {
        let mut missing = Vec::new();
        let username = required(new.username, "username", &mut missing);
        let full_name = required(new.full_name, "full_name", &mut missing);
        let email = required(new.email, "email", &mut missing);
        if new.role.is_none() {
            missing.push("role");
        }
        let Some(role) = new.role.filter(|_| missing.is_empty()) else {
            return Err(WorkspaceError::Validation {
                entity: "user",
                missing,
            });
        };
        if self.users.iter().any(|u| u.username == username) {
            return Err(WorkspaceError::UsernameTaken(username));
        }

        let user = User {
            id: next_id(self.users.iter().map(|u| u.id.as_str())),
            username,
            full_name,
            email,
            role,
            assigned_rooms: Some(0),
            last_login: None,
        };
        tracing::info!(id = %user.id, username = %user.username, role = %user.role, "user created");
        self.users.push(user);

        let idx = self.users.len() - 1;
        Ok(&self.users[idx])
    }

    pub fn delete(&mut self, id: &str) -> Result<User, WorkspaceError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| WorkspaceError::not_found("user", id))?;
        let user = self.users.remove(idx);
        tracing::info!(id, username = %user.username, "user deleted");
        Ok(user)
    }

    /// `None` lists everyone (the "all" tab).
    pub fn by_role(&self, role: Option<Role>) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .collect()
    }
}
