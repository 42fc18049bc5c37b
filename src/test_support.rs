// Test support utilities for both unit and integration tests

use crate::api::{ApiError, MembersApi, SearchMembersRequest};
use crate::members_page::MembersFetcher;
use crate::models::{Member, MembersPage, Organization, Paging};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Build a member whose display name is the capitalized login
pub fn member(login: &str) -> Member {
    let mut name = login.to_string();
    if let Some(first) = name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    Member {
        login: login.to_string(),
        name,
        avatar: None,
        group_count: Some(1),
    }
}

pub fn organization(key: &str) -> Organization {
    Organization {
        key: key.to_string(),
        name: format!("{} org", key),
        description: None,
        url: None,
        avatar: None,
    }
}

/// In-memory web API for testing
///
/// Filters and pages members the way the server does and records every
/// search request it receives.
#[derive(Default)]
pub struct FakeMembersApi {
    members: Mutex<HashMap<String, Vec<Member>>>,
    requests: Mutex<Vec<SearchMembersRequest>>,
    fail_next: AtomicBool,
}

impl FakeMembersApi {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(organization_key: &str, members: Vec<Member>) -> Self {
        let api = Self::default();
        api.members
            .lock()
            .unwrap()
            .insert(organization_key.to_string(), members);
        api
    }

    /// Make the next search fail with a server error
    pub fn fail_next_search(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<SearchMembersRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MembersApi for FakeMembersApi {
    async fn search_members(&self, request: SearchMembersRequest) -> Result<MembersPage, ApiError> {
        self.requests.lock().unwrap().push(request.clone());

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "fake failure".to_string(),
            });
        }

        let all = self.members.lock().unwrap();
        let members = all
            .get(&request.organization)
            .ok_or_else(|| ApiError::NotFound(request.organization.clone()))?;

        let needle = request.query.as_deref().map(str::to_lowercase);
        let matching: Vec<&Member> = members
            .iter()
            .filter(|m| match &needle {
                Some(q) => m.login.to_lowercase().contains(q) || m.name.to_lowercase().contains(q),
                None => true,
            })
            .collect();

        let page_index = request.page.unwrap_or(1);
        let page_size = request.page_size as usize;
        let start = (page_index as usize).saturating_sub(1) * page_size;

        Ok(MembersPage {
            paging: Paging {
                page_index,
                page_size: request.page_size,
                total: matching.len() as u64,
            },
            users: matching
                .into_iter()
                .skip(start)
                .take(page_size)
                .cloned()
                .collect(),
        })
    }

    async fn get_organization(&self, key: &str) -> Result<Organization, ApiError> {
        if self.members.lock().unwrap().contains_key(key) {
            Ok(organization(key))
        } else {
            Err(ApiError::NotFound(format!("organization '{}'", key)))
        }
    }
}

/// A fetch call observed by [`RecordingFetcher`]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCall {
    Members {
        organization_key: String,
        query: Option<String>,
    },
    MoreMembers {
        organization_key: String,
        query: Option<String>,
    },
}

/// Fetcher that only records what the page asked for
#[derive(Default)]
pub struct RecordingFetcher {
    calls: Mutex<Vec<FetchCall>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl MembersFetcher for RecordingFetcher {
    fn fetch_members(&self, organization_key: &str, query: Option<&str>) {
        self.calls.lock().unwrap().push(FetchCall::Members {
            organization_key: organization_key.to_string(),
            query: query.map(str::to_string),
        });
    }

    fn fetch_more_members(&self, organization_key: &str, query: Option<&str>) {
        self.calls.lock().unwrap().push(FetchCall::MoreMembers {
            organization_key: organization_key.to_string(),
            query: query.map(str::to_string),
        });
    }
}
