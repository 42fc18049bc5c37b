pub mod client;

use crate::models::{MembersPage, Organization};
use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

pub use client::MembersApiClient;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Not authorized, check the configured token")]
    Unauthorized,
    #[error("Server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Parameters for one `search_members` call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMembersRequest {
    pub organization: String,
    pub page_size: u32,
    /// 1-based page index, server default (first page) when unset
    pub page: Option<u32>,
    pub query: Option<String>,
}

impl SearchMembersRequest {
    /// Query-string pairs in the order the server documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("organization", self.organization.clone()),
            ("ps", self.page_size.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("p", page.to_string()));
        }
        if let Some(query) = &self.query {
            pairs.push(("q", query.clone()));
        }
        pairs
    }
}

/// Remote members web API (allows faking for tests)
#[async_trait::async_trait]
pub trait MembersApi: Send + Sync {
    async fn search_members(&self, request: SearchMembersRequest) -> Result<MembersPage, ApiError>;
    async fn get_organization(&self, key: &str) -> Result<Organization, ApiError>;
}
