use serde::{Deserialize, Serialize};

use crate::rooms::repo_types::Role;

/// Profile payload collected by the four-step onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    pub name: String,
    pub major: String,
    pub year: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Role>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
}
