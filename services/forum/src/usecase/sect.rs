use chrono::Utc;

use seekers_domain::sect::validate_sect_name;

use crate::domain::repository::{SectRepository, UserRepository};
use crate::domain::types::{Sect, User};
use crate::error::ForumError;

fn normalize(name: &str) -> Result<String, ForumError> {
    if !validate_sect_name(name) {
        return Err(ForumError::InvalidSectName);
    }
    Ok(name.trim().to_owned())
}

// ── JoinSect ─────────────────────────────────────────────────────────────────

pub struct JoinSectUseCase<S: SectRepository, U: UserRepository> {
    pub sects: S,
    pub users: U,
}

impl<S: SectRepository, U: UserRepository> JoinSectUseCase<S, U> {
    /// Move the user into an existing sect. Returns the normalized sect name.
    pub async fn execute(&self, user: &User, name: &str) -> Result<String, ForumError> {
        let name = normalize(name)?;
        if !self.sects.exists(&name).await? {
            return Err(ForumError::SectNotFound);
        }
        self.users.update_sect(user.id, &name).await?;
        Ok(name)
    }
}

// ── FoundSect ────────────────────────────────────────────────────────────────

pub struct FoundSectUseCase<S: SectRepository, U: UserRepository> {
    pub sects: S,
    pub users: U,
}

impl<S: SectRepository, U: UserRepository> FoundSectUseCase<S, U> {
    /// Register a new sect and move its founder into it.
    pub async fn execute(&self, user: &User, name: &str) -> Result<String, ForumError> {
        let name = normalize(name)?;
        let sect = Sect {
            name: name.clone(),
            founded_by: Some(user.id),
            created_at: Utc::now(),
        };
        if !self.sects.create(&sect).await? {
            return Err(ForumError::SectAlreadyExists);
        }
        self.users.update_sect(user.id, &name).await?;
        tracing::info!(sect = %name, username = %user.username, "sect founded");
        Ok(name)
    }
}
