use async_trait::async_trait;
use dsconf_core::{Error, ExtensionApi, ExtensionListResponse, ListRequest, ListedResource, Result};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const EXTENSIONS_PATH: [&str; 2] = ["config", "http-servlet-extensions"];

/// HTTP basic credentials for the configuration API.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    /// Accept any server certificate. Only meant for test servers with
    /// self-signed certificates.
    pub insecure_trust_all_tls: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            insecure_trust_all_tls: false,
        }
    }
}

/// reqwest-backed client for the directory server configuration API.
pub struct ConfigApiClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl ConfigApiClient {
    pub fn new(base_url: &str, credentials: Credentials, options: &ClientOptions) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL must be an http(s) URL, got scheme {:?}",
                base_url.scheme()
            )));
        }
        // credentials travel as basic auth only, never inside logged URLs
        let _ = base_url.set_username("");
        let _ = base_url.set_password(None);

        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.insecure_trust_all_tls)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        info!("Creating ConfigApiClient for {base_url}");
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/config/http-servlet-extensions[/{segment}..]`, with segments percent-encoded.
    fn extensions_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(EXTENSIONS_PATH)
            .extend(segments);
        Ok(url)
    }

    fn list_url(&self, request: &ListRequest) -> Result<Url> {
        let mut url = self.extensions_url(&[])?;
        if let Some(filter) = request.filter() {
            url.query_pairs_mut().append_pair("filter", filter);
        }
        Ok(url)
    }

    /// Send a GET and decode the body. Non-success statuses become `Error::Upstream`
    /// with the response text attached.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                Error::upstream(e.status().map(|s| s.as_u16()), None, e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream(Some(status.as_u16()), None, e.to_string()))?;

        if !status.is_success() {
            return Err(Error::upstream(
                Some(status.as_u16()),
                Some(body),
                status.canonical_reason().unwrap_or("request failed"),
            ));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ExtensionApi for ConfigApiClient {
    async fn list_extensions(&self, request: &ListRequest) -> Result<ExtensionListResponse> {
        let url = self.list_url(request)?;
        self.get_json(url).await
    }

    async fn get_extension(&self, name: &str) -> Result<ListedResource> {
        let url = self.extensions_url(&[name])?;
        match self.get_json(url).await {
            Err(Error::Upstream {
                status: Some(status),
                ..
            }) if status == StatusCode::NOT_FOUND.as_u16() => Err(Error::NotFound(name.to_string())),
            other => other,
        }
    }
}
