//! Read-only data source over the configured HTTP servlet extensions.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    Error, ExtensionApi, ExtensionSummary, ExtensionsState, HttpServletExtension, ListRequest,
    ListedResource, Result,
};

pub struct ExtensionListReader<A = Arc<dyn ExtensionApi>>
where
    A: ExtensionApi,
{
    api: A,
}

impl<A> ExtensionListReader<A>
where
    A: ExtensionApi,
{
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// List extensions matching `filter` and flatten them into `{id, type}` records.
    ///
    /// The upstream call is made once; any failure aborts the read.
    pub async fn list(&self, filter: Option<&str>) -> Result<ExtensionsState> {
        let request = ListRequest::new().with_filter(filter);
        info!(
            "Listing HTTP servlet extensions: filter={}",
            request.filter().unwrap_or("<none>")
        );

        let response = self.api.list_extensions(&request).await?;

        if let Ok(raw) = serde_json::to_string(&response) {
            debug!("Read list response for HTTP servlet extensions: {raw}");
        }

        let objects = summarize(&response.resources)?;
        info!("Read {} HTTP servlet extensions", objects.len());

        Ok(ExtensionsState::new(filter.map(str::to_string), objects))
    }

    /// Read a single extension by name.
    pub async fn get(&self, name: &str) -> Result<HttpServletExtension> {
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "extension name must not be empty".to_string(),
            ));
        }
        // dot segments would be resolved away by the URL instead of naming an extension
        if name == "." || name == ".." {
            return Err(Error::InvalidInput(format!(
                "extension name must not be {name:?}"
            )));
        }

        info!("Reading HTTP servlet extension: {name}");
        match self.api.get_extension(name).await? {
            ListedResource::Extension(extension) => Ok(extension),
            ListedResource::Unrecognized { id, schemas, .. } => {
                Err(Error::UnrecognizedKind { id, schemas })
            }
        }
    }
}

/// Map listed resources to summaries. Unrecognized records are skipped.
pub fn summarize(resources: &[ListedResource]) -> Result<BTreeSet<ExtensionSummary>> {
    let mut objects = BTreeSet::new();
    for resource in resources {
        match resource {
            ListedResource::Extension(extension) => {
                objects.insert(ExtensionSummary::try_from(extension)?);
            }
            ListedResource::Unrecognized { id, schemas, .. } => {
                warn!(
                    "Skipping HTTP servlet extension of unrecognized kind: id={}, schemas={schemas:?}",
                    id.as_deref().unwrap_or("<missing>")
                );
            }
        }
    }
    Ok(objects)
}
