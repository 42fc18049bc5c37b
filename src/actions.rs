use crate::api::{ApiError, MembersApi, SearchMembersRequest};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::{FetchStateChanges, MembersPage, Organization};
use crate::store::StoreHandle;
use std::sync::Arc;
use tracing::{debug, warn};

/// Async operations that fetch from the web API and write results into a store
#[derive(Clone)]
pub struct MembersActions<S: StoreHandle> {
    api: Arc<dyn MembersApi>,
    store: S,
    page_size: u32,
}

impl<S: StoreHandle> MembersActions<S> {
    pub fn new(api: Arc<dyn MembersApi>, store: S) -> Self {
        Self {
            api,
            store,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the first page of members, replacing whatever the store holds
    pub async fn fetch_members(
        &self,
        organization_key: &str,
        query: Option<&str>,
    ) -> Result<(), ApiError> {
        let query = non_empty(query);
        debug!("Fetching members of '{}' with query {:?}", organization_key, query);

        self.store.update_store(|store| {
            store.update_state(organization_key, FetchStateChanges::loading(true))
        });

        let request = self.request(organization_key, None, query.clone());
        match self.api.search_members(request).await {
            Ok(page) => {
                let changes = received_changes(&page, query);
                self.store.update_store(|store| {
                    store.receive_members(organization_key, page.users, changes);
                    store.clear_error();
                });
                Ok(())
            }
            Err(e) => Err(self.fail(organization_key, e)),
        }
    }

    /// Fetch the page after the last one received and append it
    pub async fn fetch_more_members(
        &self,
        organization_key: &str,
        query: Option<&str>,
    ) -> Result<(), ApiError> {
        let query = non_empty(query);
        let next_page = self
            .store
            .read_store(|store| store.state(organization_key).page_index)
            .map_or(1, |index| index + 1);
        debug!(
            "Fetching page {} of members of '{}' with query {:?}",
            next_page, organization_key, query
        );

        self.store.update_store(|store| {
            store.update_state(organization_key, FetchStateChanges::loading(true))
        });

        let request = self.request(organization_key, Some(next_page), query.clone());
        match self.api.search_members(request).await {
            Ok(page) => {
                let changes = received_changes(&page, query);
                self.store.update_store(|store| {
                    store.receive_more_members(organization_key, page.users, changes);
                    store.clear_error();
                });
                Ok(())
            }
            Err(e) => Err(self.fail(organization_key, e)),
        }
    }

    /// Load organization details into the store
    pub async fn fetch_organization(&self, organization_key: &str) -> Result<Organization, ApiError> {
        match self.api.get_organization(organization_key).await {
            Ok(organization) => {
                self.store
                    .update_store(|store| store.receive_organization(organization.clone()));
                Ok(organization)
            }
            Err(e) => {
                warn!("Failed to load organization '{}': {}", organization_key, e);
                self.store.update_store(|store| {
                    store.set_error(format!("Failed to load organization: {}", e))
                });
                Err(e)
            }
        }
    }

    fn request(
        &self,
        organization_key: &str,
        page: Option<u32>,
        query: Option<String>,
    ) -> SearchMembersRequest {
        SearchMembersRequest {
            organization: organization_key.to_string(),
            page_size: self.page_size,
            page,
            query,
        }
    }

    fn fail(&self, organization_key: &str, error: ApiError) -> ApiError {
        warn!("Failed to fetch members of '{}': {}", organization_key, error);
        self.store.update_store(|store| {
            store.update_state(organization_key, FetchStateChanges::loading(false));
            store.set_error(format!("Failed to load members: {}", error));
        });
        error
    }
}

fn non_empty(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_string)
}

fn received_changes(page: &MembersPage, query: Option<String>) -> FetchStateChanges {
    FetchStateChanges {
        loading: Some(false),
        total: Some(page.paging.total),
        page_index: Some(page.paging.page_index),
        query: Some(query),
    }
}
