//! Ownership trait for user-owned records.
//!
//! Workouts and exercises each belong to exactly one user. Single-record
//! lookups go through [`OwnedByUser::visible_to`], which turns a record owned
//! by somebody else into "no value" so a caller cannot learn whether a
//! foreign id exists.

use super::UserId;

/// Trait for records that have a single, immutable owner.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this record.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given user is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Keeps the record only if `user_id` owns it.
    fn visible_to(self, user_id: &UserId) -> Option<Self>
    where
        Self: Sized,
    {
        if self.is_owner(user_id) {
            Some(self)
        } else {
            None
        }
    }
}
