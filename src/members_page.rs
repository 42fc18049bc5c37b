//! Coordination logic behind the organization members page.
//!
//! The page never talks to the store or the web API directly: it reads the
//! member list and [`FetchState`] it is given, and asks a [`MembersFetcher`]
//! for data. The only state it owns is the last query it issued itself.

use crate::models::{FetchState, Member};
use tracing::debug;

/// Fetch capabilities the members page depends on.
///
/// Calls are fire-and-forget: the page neither awaits nor observes the outcome.
pub trait MembersFetcher {
    /// (Re)fetch the first page of members for an organization
    fn fetch_members(&self, organization_key: &str, query: Option<&str>);

    /// Fetch the next page of members for an organization
    fn fetch_more_members(&self, organization_key: &str, query: Option<&str>);
}

/// Page-local state: the last query this page issued
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembersPageCoordinator {
    query: Option<String>,
}

impl MembersPageCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn local_query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Whether the page must fetch when it first appears
    pub fn needs_initial_load(&self, members: &[Member], state: &FetchState) -> bool {
        let not_loaded_yet = members.is_empty() || state.query != self.query;
        !state.loading && not_loaded_yet
    }

    /// Run once when the page first appears. Returns whether a fetch was issued.
    pub fn on_first_display(
        &mut self,
        organization_key: &str,
        members: &[Member],
        state: &FetchState,
        fetcher: &dyn MembersFetcher,
    ) -> bool {
        if !self.needs_initial_load(members, state) {
            debug!(
                "Members of '{}' already loaded ({} members, query {:?})",
                organization_key,
                members.len(),
                state.query
            );
            return false;
        }

        self.issue_search(organization_key, None, fetcher);
        true
    }

    /// The user submitted a search; the query is forwarded as-is
    pub fn search(&mut self, organization_key: &str, query: String, fetcher: &dyn MembersFetcher) {
        self.issue_search(organization_key, Some(query), fetcher);
    }

    /// Continue with whatever query the store currently has in effect,
    /// which may differ from the local one.
    pub fn load_more(&self, organization_key: &str, state: &FetchState, fetcher: &dyn MembersFetcher) {
        fetcher.fetch_more_members(organization_key, state.query.as_deref());
    }

    fn issue_search(
        &mut self,
        organization_key: &str,
        query: Option<String>,
        fetcher: &dyn MembersFetcher,
    ) {
        debug!("Searching members of '{}' with {:?}", organization_key, query);
        self.query = query;
        fetcher.fetch_members(organization_key, self.query.as_deref());
    }
}

/// What the list footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterModel {
    pub count: usize,
    pub total: u64,
    pub ready: bool,
}

/// The footer is rendered only once a total is known
pub fn footer_model(members: &[Member], state: &FetchState) -> Option<FooterModel> {
    state.total.map(|total| FooterModel {
        count: members.len(),
        total,
        ready: !state.loading,
    })
}
