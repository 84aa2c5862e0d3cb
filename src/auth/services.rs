use tracing::{info, instrument, warn};

use crate::auth::dto::OnboardingProfile;
use crate::auth::repo_types::User;
use crate::state::{AppState, StoreError};

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AppState {
    /// Sign in with an email address. The password is accepted
    /// unconditionally: this is a demo stub, not an authentication
    /// mechanism. An unknown email gets a fresh account on the spot, so the
    /// call cannot fail.
    #[instrument(skip(self, _password))]
    pub fn login(&mut self, email: &str, _password: &str) -> User {
        let email = normalize_email(email);
        if let Some(user) = User::find_by_email(&self.users, &email).cloned() {
            info!(user_id = %user.id, email = %user.email, "user signed in");
            // an existing account keeps whatever onboarding progress it had
            self.current_user = Some(user.clone());
            self.persist_session();
            return user;
        }
        self.register(&email)
    }

    /// Register a new account. Fails with [`StoreError::EmailTaken`] if the
    /// email is already registered, leaving the store untouched.
    #[instrument(skip(self, _password))]
    pub fn signup(&mut self, email: &str, _password: &str) -> Result<User, StoreError> {
        let email = normalize_email(email);
        if User::find_by_email(&self.users, &email).is_some() {
            warn!(email = %email, "signup rejected: email already registered");
            return Err(StoreError::EmailTaken);
        }
        Ok(self.register(&email))
    }

    /// Clear the signed-in user and the onboarded flag. Collections keep.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "user signed out");
        }
        self.onboarded = false;
        self.persist_session();
    }

    /// Finish the profile-setup flow: overwrite the signed-in user's profile
    /// fields and mark the session onboarded. Snapshots taken earlier by
    /// memberships, messages and outputs are left as they were.
    pub fn complete_onboarding(&mut self, profile: OnboardingProfile) -> Result<User, StoreError> {
        let Some(user) = self.current_user.as_mut() else {
            warn!("onboarding attempted with nobody signed in");
            return Err(StoreError::SignedOut);
        };
        user.name = profile.name;
        user.major = profile.major;
        user.year = profile.year;
        user.interests = profile.interests;
        user.skills = profile.skills;
        user.portfolio_url = profile.portfolio_url;
        let updated = user.clone();

        // keep the account record in step with the session copy
        if let Some(stored) = User::find_by_id_mut(&mut self.users, updated.id) {
            *stored = updated.clone();
        }

        self.onboarded = true;
        info!(user_id = %updated.id, name = %updated.name, "onboarding complete");
        self.persist_session();
        Ok(updated)
    }

    /// Shared new-account branch of login and signup.
    fn register(&mut self, email: &str) -> User {
        let user = User::from_email(email);
        info!(user_id = %user.id, email = %user.email, "user registered");
        self.users.push(user.clone());
        self.current_user = Some(user.clone());
        self.onboarded = false;
        self.persist_session();
        user
    }
}
