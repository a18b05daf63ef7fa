//! The acting user, passed explicitly into every operation.
//!
//! There is no ambient login state: each command builds an [`ActorContext`]
//! from the configured user section and hands it to the services it calls.
//! Role resolution is a plain predicate on the context.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A trainee punches and edits their own attendance.
    Trainee,
    /// A mentor may edit attendance on behalf of a specified trainee.
    Mentor,
}

#[derive(Debug, Clone)]
pub struct ActorContext {
    pub user_id: i64,
    pub course_id: i64,
    pub user_name: String,
    pub role: Role,
}

impl ActorContext {
    pub fn is_trainee(&self) -> bool {
        self.role == Role::Trainee
    }

    /// Builds the context from the configured user section; fails with a
    /// pointer to `kintai init` when none exists.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user = config
            .user
            .as_ref()
            .ok_or_else(|| msg_error_anyhow!(Message::ConfigUserMissing))?;
        Ok(ActorContext {
            user_id: user.user_id,
            course_id: user.course_id,
            user_name: user.name.clone(),
            role: user.role,
        })
    }
}
