use uuid::Uuid;

use crate::auth::repo_types::User;

impl User {
    /// Find a user by email. Expects the email to be normalized already.
    pub(crate) fn find_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
        users.iter().find(|u| u.email == email)
    }

    pub(crate) fn find_by_id_mut(users: &mut [User], id: Uuid) -> Option<&mut User> {
        users.iter_mut().find(|u| u.id == id)
    }
}
