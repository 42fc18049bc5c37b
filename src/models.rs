use serde::{Deserialize, Serialize};

/// An organization (tenant), identified by its unique key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub avatar: Option<String>,
}

/// A user's membership in an organization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub login: String,
    pub name: String,
    /// Gravatar hash, if the server exposes one
    pub avatar: Option<String>,
    pub group_count: Option<u32>,
}

impl Member {
    /// Gravatar URL for this member, falling back to a generated identicon
    pub fn avatar_url(&self, size: u32) -> String {
        let hash = self.avatar.as_deref().unwrap_or("");
        format!("https://secure.gravatar.com/avatar/{hash}?s={size}&d=identicon")
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.login
        } else {
            &self.name
        }
    }
}

/// Loading/pagination/query status of an organization's member list.
///
/// Owned by the members store; the page only ever reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FetchState {
    pub loading: bool,
    pub total: Option<u64>,
    pub page_index: Option<u32>,
    pub query: Option<String>,
}

impl FetchState {
    /// Apply a partial update, leaving unset fields untouched
    pub fn merge(&mut self, changes: FetchStateChanges) {
        if let Some(loading) = changes.loading {
            self.loading = loading;
        }
        if let Some(total) = changes.total {
            self.total = Some(total);
        }
        if let Some(page_index) = changes.page_index {
            self.page_index = Some(page_index);
        }
        if let Some(query) = changes.query {
            self.query = query;
        }
    }
}

/// Partial update for [`FetchState`].
///
/// `query` is doubly optional: `None` keeps the current query, `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchStateChanges {
    pub loading: Option<bool>,
    pub total: Option<u64>,
    pub page_index: Option<u32>,
    pub query: Option<Option<String>>,
}

impl FetchStateChanges {
    pub fn loading(loading: bool) -> Self {
        Self {
            loading: Some(loading),
            ..Default::default()
        }
    }
}

/// Paging block returned alongside search results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page_index: u32,
    pub page_size: u32,
    pub total: u64,
}

/// One page of members as returned by the web API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MembersPage {
    pub paging: Paging,
    pub users: Vec<Member>,
}
