//! Output state handed to the consuming engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{Error, ExtensionKind, HttpServletExtension, Result};

/// Placeholder identifier the engine's schema model requires on every state.
pub const STATE_ID: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExtensionSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ExtensionKind,
}

impl ExtensionSummary {
    pub fn new(id: impl Into<String>, kind: ExtensionKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

impl TryFrom<&HttpServletExtension> for ExtensionSummary {
    type Error = Error;

    fn try_from(extension: &HttpServletExtension) -> Result<Self> {
        let id = extension.id();
        if id.is_empty() {
            return Err(Error::Assembly(format!(
                "{} extension has an empty id",
                extension.kind()
            )));
        }
        Ok(Self::new(id, extension.kind()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionsState {
    pub id: String,
    pub filter: Option<String>,
    pub objects: BTreeSet<ExtensionSummary>,
}

impl ExtensionsState {
    #[must_use]
    pub fn new(filter: Option<String>, objects: BTreeSet<ExtensionSummary>) -> Self {
        Self {
            id: STATE_ID.to_string(),
            filter,
            objects,
        }
    }
}
