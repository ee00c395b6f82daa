use shared::models::{ConfigUserUpdate, UserRole};
use std::collections::HashMap;
use uuid::Uuid;

/// Session-local staged role/active changes, keyed by user id.
///
/// The buffer overlays the last-fetched server state until saved: rendering
/// prefers a staged value over the server value, a user appears at most
/// once, and staging one field never clobbers the other staged field for the
/// same user. The buffer is cleared wholesale on save success and left
/// untouched on save failure so the admin can retry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EditBuffer {
    entries: HashMap<Uuid, ConfigUserUpdate>,
}

impl EditBuffer {
    /// Merge a partial edit into the entry for its user, creating the entry
    /// if absent.
    pub fn stage(&mut self, edit: ConfigUserUpdate) {
        self.entries
            .entry(edit.id)
            .or_insert_with(|| ConfigUserUpdate::empty(edit.id))
            .merge(&edit);
    }

    /// Stage a role change for `id`.
    pub fn stage_role(&mut self, id: Uuid, role: UserRole) {
        self.stage(ConfigUserUpdate {
            id,
            role: Some(role),
            active: None,
        });
    }

    /// Stage an active-flag change for `id`.
    pub fn stage_active(&mut self, id: Uuid, active: bool) {
        self.stage(ConfigUserUpdate {
            id,
            role: None,
            active: Some(active),
        });
    }

    /// The staged role for `id`, if any.
    #[must_use]
    pub fn staged_role(&self, id: Uuid) -> Option<UserRole> {
        self.entries.get(&id).and_then(|edit| edit.role)
    }

    /// The staged active flag for `id`, if any.
    #[must_use]
    pub fn staged_active(&self, id: Uuid) -> Option<bool> {
        self.entries.get(&id).and_then(|edit| edit.active)
    }

    /// Snapshot of all pending edits, one per user, for a batch save.
    #[must_use]
    pub fn updates(&self) -> Vec<ConfigUserUpdate> {
        self.entries.values().cloned().collect()
    }

    /// Number of users with pending edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is staged. Gates the save action.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_fields_in_any_order_never_clobbers() {
        let id = Uuid::new_v4();

        let mut role_first = EditBuffer::default();
        role_first.stage_role(id, UserRole::Manager);
        role_first.stage_active(id, false);

        let mut active_first = EditBuffer::default();
        active_first.stage_active(id, false);
        active_first.stage_role(id, UserRole::Manager);

        for buffer in [&role_first, &active_first] {
            assert_eq!(buffer.staged_role(id), Some(UserRole::Manager));
            assert_eq!(buffer.staged_active(id), Some(false));
        }
    }

    #[test]
    fn restaging_a_field_overwrites_only_that_field() {
        let id = Uuid::new_v4();
        let mut buffer = EditBuffer::default();

        buffer.stage_role(id, UserRole::Operator);
        buffer.stage_active(id, true);
        buffer.stage_role(id, UserRole::Auditor);

        assert_eq!(buffer.staged_role(id), Some(UserRole::Auditor));
        assert_eq!(buffer.staged_active(id), Some(true));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn each_user_appears_at_most_once_in_updates() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut buffer = EditBuffer::default();

        buffer.stage_role(first, UserRole::Admin);
        buffer.stage_active(first, false);
        buffer.stage_active(second, true);

        let updates = buffer.updates();
        assert_eq!(updates.len(), 2);

        let for_first = updates.iter().find(|u| u.id == first).unwrap();
        assert_eq!(for_first.role, Some(UserRole::Admin));
        assert_eq!(for_first.active, Some(false));

        let for_second = updates.iter().find(|u| u.id == second).unwrap();
        assert_eq!(for_second.role, None);
        assert_eq!(for_second.active, Some(true));
    }

    #[test]
    fn empty_buffer_has_no_staged_values() {
        let buffer = EditBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.staged_role(Uuid::new_v4()), None);
        assert_eq!(buffer.staged_active(Uuid::new_v4()), None);
        assert!(buffer.updates().is_empty());
    }

    #[test]
    fn failed_save_leaves_buffer_reusable() {
        // The save path snapshots updates() and only resets the buffer on
        // success; after a failure the same snapshot must be producible.
        let id = Uuid::new_v4();
        let mut buffer = EditBuffer::default();
        buffer.stage_role(id, UserRole::Manager);

        let before = buffer.updates();
        let after = buffer.updates();
        assert_eq!(before, after);
        assert!(!buffer.is_empty());
    }
}
