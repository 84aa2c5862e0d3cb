use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::repo_types::User;
use crate::config::AppConfig;
use crate::rooms::repo_types::{Message, MissionTemplate, Room, RoomMember, RoomOutput};
use crate::seed::Seed;
use crate::storage::{FileStorage, MemoryStorage, StorageClient};

/// Storage key holding the serialized signed-in user.
pub const USER_KEY: &str = "uroom_user";
/// Storage key holding the onboarded flag.
pub const ONBOARDED_KEY: &str = "uroom_onboarded";

/// Rejections surfaced by store mutations. Everything else the store does
/// is infallible by design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no user is signed in")]
    SignedOut,
    #[error("email is already registered")]
    EmailTaken,
    #[error("already a member of this room")]
    AlreadyMember,
}

/// Single source of truth for the app session: the domain collections plus
/// the signed-in identity. One instance lives for the whole page session
/// and is handed by reference to every page.
///
/// All operations run synchronously to completion; the storage mirror for
/// the two session fields happens inside the mutation that changed them.
pub struct AppState {
    pub users: Vec<User>,
    pub rooms: Vec<Room>,
    pub members: Vec<RoomMember>,
    pub messages: Vec<Message>,
    pub outputs: Vec<RoomOutput>,
    pub templates: Vec<MissionTemplate>,
    pub(crate) current_user: Option<User>,
    pub(crate) onboarded: bool,
    pub config: Arc<AppConfig>,
    storage: Arc<dyn StorageClient>,
}

impl AppState {
    /// Boot the store the way the app does: env config, file-backed session
    /// storage, demo seed (unless disabled), saved session restored.
    pub fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = Arc::new(AppConfig::from_env()?);
        let storage = Arc::new(FileStorage::new(&config.storage_dir)?);
        let seed = if config.seed_demo {
            Seed::demo()
        } else {
            Seed::empty()
        };
        Ok(Self::from_parts(seed, config, storage))
    }

    /// Assemble a store from explicit parts. Restores any saved session
    /// found in the given storage.
    pub fn from_parts(
        seed: Seed,
        config: Arc<AppConfig>,
        storage: Arc<dyn StorageClient>,
    ) -> Self {
        let mut state = Self {
            users: seed.users,
            rooms: seed.rooms,
            members: seed.members,
            messages: seed.messages,
            outputs: seed.outputs,
            templates: seed.templates,
            current_user: None,
            onboarded: false,
            config,
            storage,
        };
        state.restore_session();
        state
    }

    /// Empty store over in-memory storage, for tests.
    pub fn fake() -> Self {
        Self::from_parts(
            Seed::empty(),
            Arc::new(AppConfig::default()),
            Arc::new(MemoryStorage::new()),
        )
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Whether a user is signed in. The navigation layer gates on this.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Whether the signed-in user finished the profile-setup flow.
    pub fn is_onboarded(&self) -> bool {
        self.onboarded
    }

    /// Mirror the two session fields to durable storage. Best effort: a
    /// storage failure is logged and the mutation stands.
    pub(crate) fn persist_session(&self) {
        let user_write = match &self.current_user {
            Some(user) => serde_json::to_string(user)
                .map_err(anyhow::Error::from)
                .and_then(|raw| self.storage.set_item(USER_KEY, &raw)),
            None => self.storage.remove_item(USER_KEY),
        };
        if let Err(e) = user_write {
            warn!(error = %e, "could not persist the current user");
        }

        let flag = if self.onboarded { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(ONBOARDED_KEY, flag) {
            warn!(error = %e, "could not persist the onboarded flag");
        }
    }

    /// Read the saved session back, if any. A malformed value is treated as
    /// no saved state rather than a startup failure.
    fn restore_session(&mut self) {
        match self.storage.get_item(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(user_id = %user.id, "restored saved session");
                    self.current_user = Some(user);
                }
                Err(e) => {
                    warn!(error = %e, "saved user is malformed, starting signed out");
                }
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not read the saved user"),
        }

        match self.storage.get_item(ONBOARDED_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => self.onboarded = flag,
                Err(e) => {
                    warn!(error = %e, "saved onboarded flag is malformed, assuming false");
                }
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not read the saved onboarded flag"),
        }
    }
}
