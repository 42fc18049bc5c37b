use super::{ApiError, MembersApi, SearchMembersRequest};
use crate::config::Config;
use crate::models::{MembersPage, Organization};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

const SEARCH_MEMBERS_PATH: &str = "/api/organizations/search_members";
const SEARCH_ORGANIZATIONS_PATH: &str = "/api/organizations/search";

/// Organizations search response wrapper
#[derive(Debug, Deserialize)]
struct OrganizationsResponse {
    organizations: Vec<Organization>,
}

/// HTTP client for the organizations web API
#[derive(Clone)]
pub struct MembersApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl MembersApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server_url.clone(), config.token.clone())
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("Accept", "application/json");

        // Tokens travel as the basic auth login with an empty password
        match &self.token {
            Some(token) => request.basic_auth(token, Some("")),
            None => request,
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("Web API error response for {} ({}): {}", what, status, body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(what.to_string())),
            _ => Err(ApiError::Status { status, body }),
        }
    }
}

#[async_trait::async_trait]
impl MembersApi for MembersApiClient {
    async fn search_members(&self, request: SearchMembersRequest) -> Result<MembersPage, ApiError> {
        info!(
            "Searching members of '{}' (page {:?}, query {:?})",
            request.organization, request.page, request.query
        );

        let response = self
            .get(SEARCH_MEMBERS_PATH)
            .query(&request.query_pairs())
            .send()
            .await?;

        let page: MembersPage =
            Self::parse(response, &format!("organization '{}'", request.organization)).await?;
        debug!(
            "Received {} members (page {}, total {})",
            page.users.len(),
            page.paging.page_index,
            page.paging.total
        );
        Ok(page)
    }

    async fn get_organization(&self, key: &str) -> Result<Organization, ApiError> {
        info!("Fetching organization '{}'", key);

        let response = self
            .get(SEARCH_ORGANIZATIONS_PATH)
            .query(&[("organizations", key)])
            .send()
            .await?;

        let what = format!("organization '{}'", key);
        let parsed: OrganizationsResponse = Self::parse(response, &what).await?;
        parsed
            .organizations
            .into_iter()
            .find(|org| org.key == key)
            .ok_or(ApiError::NotFound(what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let client = MembersApiClient::new("https://sonar.example.com/", None);
        assert_eq!(client.base_url, "https://sonar.example.com");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_client_from_config() {
        let config = Config {
            token: Some("squ_abc".to_string()),
            ..Config::default()
        };
        let client = MembersApiClient::from_config(&config);
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.token.as_deref(), Some("squ_abc"));
    }

    #[test]
    fn test_organizations_response_parses() {
        let parsed: OrganizationsResponse = serde_json::from_str(
            r#"{"organizations":[{"key":"acme","name":"Acme Corp","description":null}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.organizations.len(), 1);
        assert_eq!(parsed.organizations[0].name, "Acme Corp");
        assert_eq!(parsed.organizations[0].url, None);
    }

    #[test]
    fn test_members_page_parses() {
        let page: MembersPage = serde_json::from_str(
            r#"{
                "paging": {"pageIndex": 2, "pageSize": 2, "total": 5},
                "users": [
                    {"login": "ada", "name": "Ada", "avatar": "h1", "groupCount": 1},
                    {"login": "bob", "name": "Bob"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(page.paging.page_index, 2);
        assert_eq!(page.paging.total, 5);
        assert_eq!(page.users[1].avatar, None);
    }

    // Note: requests against a live server need network access and a token,
    // so the HTTP paths are exercised through FakeMembersApi instead
}
