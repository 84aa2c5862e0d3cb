use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::rooms::repo_types::{Category, Role, Room, VibeTag};

/// Input for room creation: everything but the id and creation timestamp,
/// which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub vibe_tags: Vec<VibeTag>,
    pub roles_needed: Vec<Role>,
    #[serde(with = "super::iso_date")]
    pub date: Date,
    pub time: String,
    pub location: String,
    pub max_participants: u32,
    pub created_by: Uuid,
    #[serde(default)]
    pub is_pop_up: bool,
}

/// Input for sharing an output into a room. The author is always the
/// signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDraft {
    pub room_id: Uuid,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Schedule window for room discovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    #[serde(rename = "week")]
    ThisWeek,
}

/// Filter for the discovery page. Each list is an any-of set; empty lists
/// match everything. The filters are combined conjunctively.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub categories: Vec<Category>,
    pub vibes: Vec<VibeTag>,
    pub roles: Vec<Role>,
    pub time: TimeWindow,
}

impl RoomFilter {
    pub(crate) fn accepts(&self, room: &Room, today: Date) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&room.category) {
            return false;
        }
        if !self.vibes.is_empty() && !room.vibe_tags.iter().any(|v| self.vibes.contains(v)) {
            return false;
        }
        if !self.roles.is_empty() && !room.roles_needed.iter().any(|r| self.roles.contains(r)) {
            return false;
        }
        match self.time {
            TimeWindow::All => true,
            TimeWindow::Today => room.date == today,
            TimeWindow::ThisWeek => {
                let (room_year, room_week, _) = room.date.to_iso_week_date();
                let (year, week, _) = today.to_iso_week_date();
                room_year == year && room_week == week
            }
        }
    }
}
