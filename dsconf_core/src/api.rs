use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{ListedResource, Result};

/// Parameters of a "list extensions" call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    filter: Option<String>,
}

impl ListRequest {
    #[must_use]
    pub const fn new() -> Self {
        Self { filter: None }
    }

    /// Attach a SCIM filter. Absent and empty filters leave the request unfiltered.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.filter(|f| !f.is_empty()).map(str::to_string);
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

/// Body of a list response from the configuration API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionListResponse {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(
        rename = "totalResults",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_results: Option<u64>,
    #[serde(rename = "Resources", default)]
    pub resources: Vec<ListedResource>,
}

/// The remote configuration API, as far as servlet extensions are concerned.
#[async_trait]
pub trait ExtensionApi: Send + Sync {
    async fn list_extensions(&self, request: &ListRequest) -> Result<ExtensionListResponse>;

    /// Fetch one extension by name. Missing extensions yield `Error::NotFound`.
    async fn get_extension(&self, name: &str) -> Result<ListedResource>;
}

#[async_trait]
impl<T> ExtensionApi for Arc<T>
where
    T: ExtensionApi + ?Sized,
{
    async fn list_extensions(&self, request: &ListRequest) -> Result<ExtensionListResponse> {
        (**self).list_extensions(request).await
    }

    async fn get_extension(&self, name: &str) -> Result<ListedResource> {
        (**self).get_extension(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_filter_is_dropped() {
        assert_eq!(ListRequest::new().with_filter(Some("")).filter(), None);
        assert_eq!(ListRequest::new().with_filter(None).filter(), None);
        assert_eq!(
            ListRequest::new()
                .with_filter(Some("id eq \"fs-ext\""))
                .filter(),
            Some("id eq \"fs-ext\"")
        );
    }

    #[test]
    fn missing_resources_decode_as_empty() -> std::result::Result<(), serde_json::Error> {
        let response: ExtensionListResponse = serde_json::from_value(json!({
            "schemas": ["urn:pingidentity:schemas:configuration:messages:2.0:ListResponse"],
            "totalResults": 0
        }))?;
        assert!(response.resources.is_empty());
        assert_eq!(response.total_results, Some(0));
        Ok(())
    }
}
