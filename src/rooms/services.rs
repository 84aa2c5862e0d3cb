use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::rooms::dto::{OutputDraft, RoomDraft, RoomFilter};
use crate::rooms::repo_types::{Message, Role, Room, RoomMember, RoomOutput};
use crate::state::{AppState, StoreError};

impl AppState {
    /// Join a room, optionally claiming one of its roles. At most one
    /// membership exists per (room, user) pair; a second join is rejected
    /// with [`StoreError::AlreadyMember`] and changes nothing.
    #[instrument(skip(self))]
    pub fn join_room(&mut self, room_id: Uuid, role: Option<Role>) -> Result<RoomMember, StoreError> {
        let user = self.current_user.clone().ok_or(StoreError::SignedOut)?;
        if RoomMember::find(&self.members, room_id, user.id).is_some() {
            warn!(room_id = %room_id, user_id = %user.id, "join rejected: already a member");
            return Err(StoreError::AlreadyMember);
        }
        Ok(self.insert_member(room_id, user, role))
    }

    /// Leave a room. Ok(true) when a membership was removed, Ok(false) when
    /// the user was not a member to begin with.
    pub fn leave_room(&mut self, room_id: Uuid) -> Result<bool, StoreError> {
        let user_id = self
            .current_user
            .as_ref()
            .ok_or(StoreError::SignedOut)?
            .id;
        let before = self.members.len();
        self.members
            .retain(|m| !(m.room_id == room_id && m.user_id == user_id));
        let left = self.members.len() < before;
        if left {
            info!(room_id = %room_id, user_id = %user_id, "left room");
        }
        Ok(left)
    }

    /// Create a room from a draft, most-recent-first. The creator, when
    /// signed in, joins automatically with no chosen role.
    #[instrument(skip(self, draft))]
    pub fn create_room(&mut self, draft: RoomDraft) -> Room {
        let room = Room {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            vibe_tags: draft.vibe_tags,
            roles_needed: draft.roles_needed,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            max_participants: draft.max_participants,
            created_by: draft.created_by,
            created_at: OffsetDateTime::now_utc(),
            is_pop_up: draft.is_pop_up,
        };
        info!(room_id = %room.id, title = %room.title, category = %room.category, "room created");
        self.rooms.insert(0, room.clone());
        if let Some(user) = self.current_user.clone() {
            self.insert_member(room.id, user, None);
        }
        room
    }

    /// Post a chat line into a room as the signed-in user.
    pub fn send_message(&mut self, room_id: Uuid, text: impl Into<String>) -> Result<Message, StoreError> {
        let user = self.current_user.clone().ok_or(StoreError::SignedOut)?;
        let message = Message {
            id: Uuid::new_v4(),
            room_id,
            user_id: user.id,
            user,
            text: text.into(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Share an output into a room as the signed-in user.
    pub fn add_output(&mut self, draft: OutputDraft) -> Result<RoomOutput, StoreError> {
        let user = self.current_user.clone().ok_or(StoreError::SignedOut)?;
        let output = RoomOutput {
            id: Uuid::new_v4(),
            room_id: draft.room_id,
            user_id: user.id,
            user,
            title: draft.title,
            link: draft.link,
            image_url: draft.image_url,
            created_at: OffsetDateTime::now_utc(),
        };
        info!(output_id = %output.id, room_id = %output.room_id, "output added");
        self.outputs.push(output.clone());
        Ok(output)
    }

    /// Members of a room, in join order.
    pub fn room_members(&self, room_id: Uuid) -> Vec<RoomMember> {
        RoomMember::list_for_room(&self.members, room_id)
    }

    /// Messages of a room, in chronological order.
    pub fn room_messages(&self, room_id: Uuid) -> Vec<Message> {
        Message::list_for_room(&self.messages, room_id)
    }

    /// Outputs shared into a room, in insertion order.
    pub fn room_outputs(&self, room_id: Uuid) -> Vec<RoomOutput> {
        RoomOutput::list_for_room(&self.outputs, room_id)
    }

    /// Rooms the user belongs to, most-recently-created first.
    pub fn user_rooms(&self, user_id: Uuid) -> Vec<Room> {
        Room::list_for_user(&self.rooms, &self.members, user_id)
    }

    /// Outputs authored by the user across all rooms.
    pub fn user_outputs(&self, user_id: Uuid) -> Vec<RoomOutput> {
        RoomOutput::list_by_user(&self.outputs, user_id)
    }

    /// Whether the signed-in user is a member of the room. False when
    /// nobody is signed in.
    pub fn is_user_in_room(&self, room_id: Uuid) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| RoomMember::find(&self.members, room_id, u.id).is_some())
    }

    /// Rooms matching a discovery filter, in collection order.
    pub fn filter_rooms(&self, filter: &RoomFilter) -> Vec<Room> {
        let today = OffsetDateTime::now_utc().date();
        self.rooms
            .iter()
            .filter(|r| filter.accepts(r, today))
            .cloned()
            .collect()
    }

    fn insert_member(&mut self, room_id: Uuid, user: User, role: Option<Role>) -> RoomMember {
        let member = RoomMember {
            id: Uuid::new_v4(),
            room_id,
            user_id: user.id,
            user,
            role_chosen: role,
            joined_at: OffsetDateTime::now_utc(),
        };
        info!(
            room_id = %room_id,
            user_id = %member.user_id,
            role = ?member.role_chosen,
            "joined room"
        );
        self.members.push(member.clone());
        member
    }
}

#[cfg(test)]
mod room_ops_tests {
    use super::*;
    use crate::auth::dto::OnboardingProfile;
    use crate::rooms::dto::TimeWindow;
    use crate::rooms::repo_types::{Category, VibeTag};
    use time::macros::date;

    fn draft(title: &str, created_by: Uuid) -> RoomDraft {
        RoomDraft {
            title: title.into(),
            description: "A room".into(),
            category: Category::Photography,
            vibe_tags: vec![VibeTag::Chill],
            roles_needed: vec![Role::Camera],
            date: date!(2026 - 09 - 18),
            time: "15:00".into(),
            location: "Library steps".into(),
            max_participants: 4,
            created_by,
            is_pop_up: false,
        }
    }

    fn signed_in() -> AppState {
        let mut state = AppState::fake();
        state.signup("maya@campus.edu", "pw").expect("signup");
        state
    }

    #[test]
    fn join_requires_sign_in() {
        let mut state = AppState::fake();
        let err = state.join_room(Uuid::new_v4(), None).expect_err("signed out");
        assert_eq!(err, StoreError::SignedOut);
        assert!(state.members.is_empty());
    }

    #[test]
    fn second_join_is_rejected_and_changes_nothing() {
        let mut state = signed_in();
        let room_id = Uuid::new_v4();
        state.join_room(room_id, Some(Role::Camera)).expect("first join");
        let err = state
            .join_room(room_id, Some(Role::Editor))
            .expect_err("second join");
        assert_eq!(err, StoreError::AlreadyMember);

        let members = state.room_members(room_id);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].role_chosen, Some(Role::Camera));
    }

    #[test]
    fn leave_then_rejoin_keeps_one_membership_with_new_role() {
        let mut state = signed_in();
        let room_id = Uuid::new_v4();
        state.join_room(room_id, Some(Role::Camera)).expect("join");
        assert!(state.leave_room(room_id).expect("leave"));
        assert!(!state.leave_room(room_id).expect("second leave is a no-op"));
        state.join_room(room_id, Some(Role::Editor)).expect("rejoin");

        let members = state.room_members(room_id);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].role_chosen, Some(Role::Editor));
    }

    #[test]
    fn create_room_auto_joins_creator_without_role() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let room = state.create_room(draft("Shoot", user_id));

        let members = state.room_members(room.id);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].user_id, user_id);
        assert_eq!(members[0].role_chosen, None);
        assert!(state.is_user_in_room(room.id));

        // most-recent-first in both views
        assert_eq!(state.rooms[0].id, room.id);
        assert_eq!(state.user_rooms(user_id)[0].id, room.id);
    }

    #[test]
    fn create_room_signed_out_skips_auto_join() {
        let mut state = AppState::fake();
        let room = state.create_room(draft("Shoot", Uuid::new_v4()));
        assert!(state.room_members(room.id).is_empty());
        assert_eq!(state.rooms.len(), 1);
    }

    #[test]
    fn rooms_are_ordered_most_recent_first() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let first = state.create_room(draft("First", user_id));
        let second = state.create_room(draft("Second", user_id));

        let ids: Vec<Uuid> = state.rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        let mine: Vec<Uuid> = state.user_rooms(user_id).iter().map(|r| r.id).collect();
        assert_eq!(mine, vec![second.id, first.id]);
    }

    #[test]
    fn send_message_and_add_output_require_sign_in() {
        let mut state = AppState::fake();
        let room_id = Uuid::new_v4();
        assert_eq!(
            state.send_message(room_id, "hi").expect_err("signed out"),
            StoreError::SignedOut
        );
        let output = OutputDraft {
            room_id,
            title: "Cut".into(),
            link: "https://example.com/cut".into(),
            image_url: None,
        };
        assert_eq!(
            state.add_output(output).expect_err("signed out"),
            StoreError::SignedOut
        );
        assert!(state.messages.is_empty());
        assert!(state.outputs.is_empty());
    }

    #[test]
    fn messages_and_outputs_keep_insertion_order_per_room() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let room = state.create_room(draft("Shoot", user_id));
        let other = state.create_room(draft("Other", user_id));

        state.send_message(room.id, "first").expect("send");
        state.send_message(other.id, "elsewhere").expect("send");
        state.send_message(room.id, "second").expect("send");

        let texts: Vec<String> = state
            .room_messages(room.id)
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["first".to_string(), "second".to_string()]);

        state
            .add_output(OutputDraft {
                room_id: room.id,
                title: "Teaser".into(),
                link: "https://example.com/teaser".into(),
                image_url: None,
            })
            .expect("add output");
        assert_eq!(state.room_outputs(room.id).len(), 1);
        assert_eq!(state.user_outputs(user_id).len(), 1);
        assert!(state.room_outputs(other.id).is_empty());
    }

    #[test]
    fn snapshots_do_not_follow_profile_changes() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let room = state.create_room(draft("Shoot", user_id));
        let message = state.send_message(room.id, "hello").expect("send");
        assert_eq!(message.user.name, "maya");

        state
            .complete_onboarding(OnboardingProfile {
                name: "Maya Chen".into(),
                major: "Film".into(),
                year: "Junior".into(),
                interests: vec![],
                skills: vec![],
                portfolio_url: None,
            })
            .expect("onboard");

        let recorded = &state.room_messages(room.id)[0];
        assert_eq!(recorded.user.name, "maya");
        let membership = &state.room_members(room.id)[0];
        assert_eq!(membership.user.name, "maya");
        // but the live account did change
        assert_eq!(state.current_user().expect("signed in").name, "Maya Chen");
    }

    #[test]
    fn is_user_in_room_is_false_when_signed_out() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let room = state.create_room(draft("Shoot", user_id));
        assert!(state.is_user_in_room(room.id));
        state.logout();
        assert!(!state.is_user_in_room(room.id));
    }

    #[test]
    fn filter_rooms_combines_category_vibe_and_role() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let photo = state.create_room(draft("Photo walk", user_id));
        let mut hack = draft("Hack night", user_id);
        hack.category = Category::Hackathon;
        hack.vibe_tags = vec![VibeTag::Serious];
        hack.roles_needed = vec![Role::Developer, Role::Designer];
        let hack = state.create_room(hack);

        let by_category = state.filter_rooms(&RoomFilter {
            categories: vec![Category::Hackathon],
            ..RoomFilter::default()
        });
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, hack.id);

        let by_vibe = state.filter_rooms(&RoomFilter {
            vibes: vec![VibeTag::Chill],
            ..RoomFilter::default()
        });
        assert_eq!(by_vibe.len(), 1);
        assert_eq!(by_vibe[0].id, photo.id);

        let by_role = state.filter_rooms(&RoomFilter {
            roles: vec![Role::Designer, Role::Camera],
            ..RoomFilter::default()
        });
        assert_eq!(by_role.len(), 2);

        let none = state.filter_rooms(&RoomFilter {
            categories: vec![Category::Hackathon],
            vibes: vec![VibeTag::Chill],
            ..RoomFilter::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn filter_rooms_today_window() {
        let mut state = signed_in();
        let user_id = state.current_user().expect("signed in").id;
        let mut today_draft = draft("Today", user_id);
        today_draft.date = OffsetDateTime::now_utc().date();
        let today_room = state.create_room(today_draft);
        state.create_room(draft("Far future", user_id));

        let todays = state.filter_rooms(&RoomFilter {
            time: TimeWindow::Today,
            ..RoomFilter::default()
        });
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].id, today_room.id);

        let this_week = state.filter_rooms(&RoomFilter {
            time: TimeWindow::ThisWeek,
            ..RoomFilter::default()
        });
        assert!(this_week.iter().any(|r| r.id == today_room.id));
    }
}
