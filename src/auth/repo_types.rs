use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rooms::repo_types::Role;

/// Account record for a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,                 // unique user ID
    pub name: String,
    pub email: String,            // normalized: trimmed, lowercase
    pub major: String,
    pub year: String,
    pub interests: Vec<String>,
    pub skills: Vec<Role>,        // roles the user can fill in a room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub avatar: String,           // placeholder URI, deterministic per email
}

impl User {
    /// Synthesize a fresh account from an email address: the display name is
    /// the local part, the profile stays empty until onboarding fills it in.
    pub(crate) fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: Uuid::new_v4(),
            name,
            email: email.to_string(),
            major: String::new(),
            year: String::new(),
            interests: Vec::new(),
            skills: Vec::new(),
            portfolio_url: None,
            avatar: Self::placeholder_avatar(email),
        }
    }

    /// Deterministic placeholder avatar keyed by the email address.
    pub fn placeholder_avatar(email: &str) -> String {
        format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")
    }
}
