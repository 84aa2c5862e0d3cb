use uuid::Uuid;

use crate::rooms::repo_types::{Message, Room, RoomMember, RoomOutput};

impl RoomMember {
    /// Membership for a (room, user) pair, if one exists.
    pub(crate) fn find(members: &[RoomMember], room_id: Uuid, user_id: Uuid) -> Option<&RoomMember> {
        members
            .iter()
            .find(|m| m.room_id == room_id && m.user_id == user_id)
    }

    pub(crate) fn list_for_room(members: &[RoomMember], room_id: Uuid) -> Vec<RoomMember> {
        members
            .iter()
            .filter(|m| m.room_id == room_id)
            .cloned()
            .collect()
    }
}

impl Message {
    pub(crate) fn list_for_room(messages: &[Message], room_id: Uuid) -> Vec<Message> {
        messages
            .iter()
            .filter(|m| m.room_id == room_id)
            .cloned()
            .collect()
    }
}

impl RoomOutput {
    pub(crate) fn list_for_room(outputs: &[RoomOutput], room_id: Uuid) -> Vec<RoomOutput> {
        outputs
            .iter()
            .filter(|o| o.room_id == room_id)
            .cloned()
            .collect()
    }

    pub(crate) fn list_by_user(outputs: &[RoomOutput], user_id: Uuid) -> Vec<RoomOutput> {
        outputs
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl Room {
    /// Rooms the user is a member of, in rooms-collection order
    /// (most-recently-created first), not join order.
    pub(crate) fn list_for_user(rooms: &[Room], members: &[RoomMember], user_id: Uuid) -> Vec<Room> {
        rooms
            .iter()
            .filter(|r| RoomMember::find(members, r.id, user_id).is_some())
            .cloned()
            .collect()
    }
}
