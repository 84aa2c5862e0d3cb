//! Application core for URoom, a campus app for finding and running small
//! creative collaboration sessions ("rooms").
//!
//! The crate owns the domain model, the demo seed dataset, the in-memory
//! application store ([`AppState`]) with every mutation and query the pages
//! call, and the thin persistence layer that mirrors the signed-in user and
//! the onboarded flag to durable storage. The view layer consumes all of it
//! through one [`AppState`] handle created at startup:
//!
//! ```
//! use uroom_core::AppState;
//!
//! let mut app = AppState::fake();
//! let user = app.signup("maya@campus.edu", "pw").expect("fresh email");
//! assert!(app.is_authenticated());
//! assert!(app.user_rooms(user.id).is_empty());
//! ```

pub mod auth;
pub mod config;
pub mod rooms;
pub mod seed;
pub mod state;
pub mod storage;

pub use auth::dto::OnboardingProfile;
pub use auth::repo_types::User;
pub use config::AppConfig;
pub use rooms::dto::{OutputDraft, RoomDraft, RoomFilter, TimeWindow};
pub use rooms::repo_types::{
    Category, Message, MissionTemplate, Role, Room, RoomMember, RoomOutput, VibeTag,
};
pub use seed::Seed;
pub use state::{AppState, StoreError, ONBOARDED_KEY, USER_KEY};
pub use storage::{FileStorage, MemoryStorage, StorageClient};
