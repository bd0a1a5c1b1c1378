//! Thin typed client for the Linode API v4 domain endpoints
//!
//! ## API Reference
//!
//! - List Domains: GET `/{version}/domains` (`X-Filter: {"domain": "example.com"}`)
//! - List Domain Records: GET `/{version}/domains/:domain_id/records`
//! - Create Domain Record: POST `/{version}/domains/:domain_id/records`
//! - Update Domain Record: PUT `/{version}/domains/:domain_id/records/:record_id`
//! - Delete Domain Record: DELETE `/{version}/domains/:domain_id/records/:record_id`
//!
//! List endpoints are paginated; the client walks every page.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::LinodeError;
use crate::types::{ApiErrorBody, Domain, DomainRecord, DomainRecordOptions, MAX_PAGE_SIZE, Page};

/// Linode API base URL
pub const DEFAULT_API_URL: &str = "https://api.linode.com";

/// Linode API version path segment
pub const DEFAULT_API_VERSION: &str = "v4";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("libdns-linode/", env!("CARGO_PKG_VERSION"));

/// Linode API client
///
/// Configured once at construction; cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct LinodeClient {
    http: Client,
    /// ⚠️ NEVER log this value
    api_token: String,
    /// `{base}/{version}`, without trailing slash
    base_url: String,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for LinodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinodeClient")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LinodeClient {
    /// Create a new Linode API client
    ///
    /// # Parameters
    ///
    /// - `api_token`: Personal access token; an empty token sends no
    ///   `Authorization` header
    /// - `api_url`: Alternate base URL; `https://` is assumed when the scheme
    ///   is missing
    /// - `api_version`: API version path segment (default `v4`)
    pub fn new(
        api_token: impl Into<String>,
        api_url: Option<&str>,
        api_version: Option<&str>,
    ) -> Result<Self, LinodeError> {
        let base = normalize_base_url(api_url.unwrap_or(DEFAULT_API_URL))?;
        let version = api_version.unwrap_or(DEFAULT_API_VERSION).trim_matches('/');

        let http = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_token: api_token.into(),
            base_url: format!("{}/{}", base, version),
        })
    }

    /// The versioned API root every request is issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List domains, optionally restricted to one exact domain name
    pub async fn list_domains(&self, domain: Option<&str>) -> Result<Vec<Domain>, LinodeError> {
        let filter = domain.map(|d| serde_json::json!({ "domain": d }));
        self.list_all("/domains", filter.as_ref()).await
    }

    /// List every record of a domain
    pub async fn list_domain_records(
        &self,
        domain_id: u64,
    ) -> Result<Vec<DomainRecord>, LinodeError> {
        self.list_all(&format!("/domains/{}/records", domain_id), None)
            .await
    }

    /// Create a record in a domain
    pub async fn create_domain_record(
        &self,
        domain_id: u64,
        options: &DomainRecordOptions,
    ) -> Result<DomainRecord, LinodeError> {
        let req = self
            .request(Method::POST, &format!("/domains/{}/records", domain_id))
            .json(options);
        self.send(req).await
    }

    /// Replace the fields of an existing record
    pub async fn update_domain_record(
        &self,
        domain_id: u64,
        record_id: u64,
        options: &DomainRecordOptions,
    ) -> Result<DomainRecord, LinodeError> {
        let req = self
            .request(
                Method::PUT,
                &format!("/domains/{}/records/{}", domain_id, record_id),
            )
            .json(options);
        self.send(req).await
    }

    /// Delete a record from a domain
    pub async fn delete_domain_record(
        &self,
        domain_id: u64,
        record_id: u64,
    ) -> Result<(), LinodeError> {
        let req = self.request(
            Method::DELETE,
            &format!("/domains/{}/records/{}", domain_id, record_id),
        );
        check_status(req.send().await?).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json");

        if self.api_token.is_empty() {
            req
        } else {
            req.bearer_auth(&self.api_token)
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, LinodeError> {
        let response = check_status(req.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&serde_json::Value>,
    ) -> Result<Vec<T>, LinodeError> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut req = self
                .request(Method::GET, path)
                .query(&[("page", page), ("page_size", MAX_PAGE_SIZE)]);
            if let Some(filter) = filter {
                req = req.header("X-Filter", filter.to_string());
            }

            let result: Page<T> = self.send(req).await?;
            tracing::debug!(
                "Fetched {} item(s) from {} (page {}/{})",
                result.data.len(),
                path,
                result.page,
                result.pages
            );
            items.extend(result.data);

            if page >= result.pages {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

/// Pass 2xx responses through; decode Linode's error body otherwise
async fn check_status(response: Response) -> Result<Response, LinodeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error response".to_string());
    let reasons = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.reasons())
        .ok()
        .filter(|r| !r.is_empty())
        .unwrap_or(body);

    Err(LinodeError::api(status, &reasons))
}

fn normalize_base_url(url: &str) -> Result<String, LinodeError> {
    let trimmed = url.trim();
    // Scheme detection must run before trailing slashes are removed
    let with_scheme = if trimmed.contains("://") {
        trimmed.trim_end_matches('/').to_string()
    } else {
        format!("https://{}", trimmed.trim_end_matches('/'))
    };

    let parsed = Url::parse(&with_scheme)
        .map_err(|e| LinodeError::InvalidUrl(format!("{}: {}", url, e)))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(LinodeError::InvalidUrl(format!("{}: missing host", url)));
    }
    Ok(with_scheme)
}
