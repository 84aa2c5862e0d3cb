use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Creative discipline a room belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Film & Video")]
    FilmVideo,
    Photography,
    Design,
    #[serde(rename = "Tech & Code")]
    TechCode,
    Writing,
    #[serde(rename = "Music & Audio")]
    MusicAudio,
    #[serde(rename = "Portfolio Review")]
    PortfolioReview,
    Hackathon,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::FilmVideo,
        Category::Photography,
        Category::Design,
        Category::TechCode,
        Category::Writing,
        Category::MusicAudio,
        Category::PortfolioReview,
        Category::Hackathon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FilmVideo => "Film & Video",
            Category::Photography => "Photography",
            Category::Design => "Design",
            Category::TechCode => "Tech & Code",
            Category::Writing => "Writing",
            Category::MusicAudio => "Music & Audio",
            Category::PortfolioReview => "Portfolio Review",
            Category::Hackathon => "Hackathon",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mood label describing how a room intends to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VibeTag {
    Chill,
    Serious,
    #[serde(rename = "Beginner-friendly")]
    BeginnerFriendly,
    #[serde(rename = "Portfolio-focused")]
    PortfolioFocused,
}

impl VibeTag {
    pub const ALL: [VibeTag; 4] = [
        VibeTag::Chill,
        VibeTag::Serious,
        VibeTag::BeginnerFriendly,
        VibeTag::PortfolioFocused,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VibeTag::Chill => "Chill",
            VibeTag::Serious => "Serious",
            VibeTag::BeginnerFriendly => "Beginner-friendly",
            VibeTag::PortfolioFocused => "Portfolio-focused",
        }
    }
}

impl std::fmt::Display for VibeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contribution slot a room wants filled; doubles as a skill a user can claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Actor,
    Camera,
    Editor,
    Designer,
    Developer,
    Writer,
    Director,
    Producer,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Actor,
        Role::Camera,
        Role::Editor,
        Role::Designer,
        Role::Developer,
        Role::Writer,
        Role::Director,
        Role::Producer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Actor => "Actor",
            Role::Camera => "Camera",
            Role::Editor => "Editor",
            Role::Designer => "Designer",
            Role::Developer => "Developer",
            Role::Writer => "Writer",
            Role::Director => "Director",
            Role::Producer => "Producer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bounded-size collaborative session with a creative mission, a schedule
/// and role slots. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub vibe_tags: Vec<VibeTag>,
    pub roles_needed: Vec<Role>, // ordered, duplicates allowed
    #[serde(with = "super::iso_date")]
    pub date: Date,
    pub time: String, // free-form, e.g. "19:00"
    pub location: String,
    pub max_participants: u32,
    pub created_by: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub is_pop_up: bool,
}

/// Membership of one user in one room. At most one exists per
/// (room_id, user_id) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMember {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub user: User, // snapshot taken at join time, never updated afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_chosen: Option<Role>,
    #[serde(with = "time::serde::rfc3339")]
    pub joined_at: OffsetDateTime,
}

/// Chat line posted in a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub user: User, // snapshot taken at send time
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Piece of work a member shares back into a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOutput {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub user: User, // snapshot taken when the output was added
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Static preset used to pre-fill room creation. Read-only seed data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionTemplate {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub suggested_roles: Vec<Role>,
    pub suggested_vibes: Vec<VibeTag>,
}
