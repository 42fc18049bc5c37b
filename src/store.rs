use crate::models::{FetchState, FetchStateChanges, Member, Organization};
use dioxus::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Member list and fetch state of one organization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationMembers {
    pub members: Vec<Member>,
    pub state: FetchState,
}

/// Client-side state container for organizations and their members
///
/// Only the fetch actions write to it; pages read snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembersStore {
    organizations: HashMap<String, Organization>,
    members: HashMap<String, OrganizationMembers>,
    last_error: Option<String>,
}

impl MembersStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organization(&self, key: &str) -> Option<&Organization> {
        self.organizations.get(key)
    }

    pub fn receive_organization(&mut self, organization: Organization) {
        self.organizations
            .insert(organization.key.clone(), organization);
    }

    pub fn members(&self, key: &str) -> &[Member] {
        self.members
            .get(key)
            .map(|entry| entry.members.as_slice())
            .unwrap_or(&[])
    }

    pub fn state(&self, key: &str) -> FetchState {
        self.members
            .get(key)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    pub fn update_state(&mut self, key: &str, changes: FetchStateChanges) {
        self.entry(key).state.merge(changes);
    }

    /// Replace the member list, as after fetching a first page
    pub fn receive_members(&mut self, key: &str, members: Vec<Member>, changes: FetchStateChanges) {
        let entry = self.entry(key);
        entry.members = members;
        entry.state.merge(changes);
    }

    /// Append to the member list, as after fetching a following page
    pub fn receive_more_members(
        &mut self,
        key: &str,
        members: Vec<Member>,
        changes: FetchStateChanges,
    ) {
        let entry = self.entry(key);
        entry.members.extend(members);
        entry.state.merge(changes);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    fn entry(&mut self, key: &str) -> &mut OrganizationMembers {
        self.members.entry(key.to_string()).or_default()
    }
}

/// Write access to a [`MembersStore`], wherever it lives
pub trait StoreHandle: Clone {
    fn update_store<R>(&self, f: impl FnOnce(&mut MembersStore) -> R) -> R;

    fn read_store<R>(&self, f: impl FnOnce(&MembersStore) -> R) -> R;
}

/// Reactive store used by the UI; writes re-render subscribed components
impl StoreHandle for Signal<MembersStore> {
    fn update_store<R>(&self, f: impl FnOnce(&mut MembersStore) -> R) -> R {
        let mut signal = *self;
        let mut store = signal.write();
        f(&mut *store)
    }

    fn read_store<R>(&self, f: impl FnOnce(&MembersStore) -> R) -> R {
        f(&*self.peek())
    }
}

/// Thread-safe store for use outside the UI runtime
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MembersStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MembersStore {
        self.read_store(|store| store.clone())
    }
}

impl StoreHandle for SharedStore {
    fn update_store<R>(&self, f: impl FnOnce(&mut MembersStore) -> R) -> R {
        let mut store = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *store)
    }

    fn read_store<R>(&self, f: impl FnOnce(&MembersStore) -> R) -> R {
        let store = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&*store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(login: &str) -> Member {
        Member {
            login: login.to_string(),
            name: login.to_uppercase(),
            avatar: None,
            group_count: None,
        }
    }

    #[test]
    fn test_unknown_organization_has_empty_defaults() {
        let store = MembersStore::new();
        assert!(store.members("nope").is_empty());
        assert_eq!(store.state("nope"), FetchState::default());
        assert!(store.organization("nope").is_none());
    }

    #[test]
    fn test_receive_members_replaces_and_more_appends() {
        let mut store = MembersStore::new();
        store.receive_members(
            "acme",
            vec![member("a"), member("b")],
            FetchStateChanges {
                loading: Some(false),
                total: Some(3),
                page_index: Some(1),
                query: Some(None),
            },
        );
        store.receive_more_members(
            "acme",
            vec![member("c")],
            FetchStateChanges {
                page_index: Some(2),
                ..Default::default()
            },
        );

        let logins: Vec<_> = store.members("acme").iter().map(|m| m.login.as_str()).collect();
        assert_eq!(logins, vec!["a", "b", "c"]);
        assert_eq!(store.state("acme").page_index, Some(2));
        assert_eq!(store.state("acme").total, Some(3));

        store.receive_members("acme", vec![member("z")], FetchStateChanges::default());
        assert_eq!(store.members("acme").len(), 1);
    }

    #[test]
    fn test_organizations_are_isolated() {
        let mut store = MembersStore::new();
        store.update_state("acme", FetchStateChanges::loading(true));
        assert!(store.state("acme").loading);
        assert!(!store.state("other").loading);
    }

    #[test]
    fn test_error_lifecycle() {
        let mut store = MembersStore::new();
        store.set_error("boom");
        assert_eq!(store.last_error(), Some("boom"));
        store.clear_error();
        assert_eq!(store.last_error(), None);
    }

    #[test]
    fn test_shared_store_handle() {
        let store = SharedStore::new();
        let clone = store.clone();
        clone.update_store(|s| s.update_state("acme", FetchStateChanges::loading(true)));
        assert!(store.read_store(|s| s.state("acme").loading));
        assert!(store.snapshot().state("acme").loading);
    }
}
