//! HTTP servlet extension kinds and the records the configuration API returns.
//!
//! The API tags each record implicitly through its `schemas` array. Decoding
//! resolves that tag once into [`HttpServletExtension`], so downstream code
//! matches on a closed set of variants instead of probing optional fields.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema URN prefix shared by every servlet extension resource.
pub const SCHEMA_URN_PREFIX: &str =
    "urn:pingidentity:schemas:configuration:2.0:http-servlet-extension:";

/// Attributes of a single extension, minus the `schemas` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionBody {
    pub id: String,
    /// Every other attribute of the record, kept verbatim.
    pub attributes: Map<String, Value>,
}

impl ExtensionBody {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

macro_rules! define_extension_kinds {
    (
        $(
            $(#[$variant_meta:meta])*
            $variant:ident => $tag:literal
        ),* $(,)?
    ) => {
        /// Known HTTP servlet extension kinds, keyed by their schema tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum ExtensionKind {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $tag)]
                $variant,
            )*
        }

        impl ExtensionKind {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)*
                }
            }

            #[must_use]
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        /// One HTTP servlet extension, tagged by kind.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum HttpServletExtension {
            $(
                $(#[$variant_meta])*
                $variant(ExtensionBody),
            )*
        }

        impl HttpServletExtension {
            #[must_use]
            pub fn from_parts(kind: ExtensionKind, body: ExtensionBody) -> Self {
                match kind {
                    $(ExtensionKind::$variant => Self::$variant(body),)*
                }
            }

            #[must_use]
            pub const fn kind(&self) -> ExtensionKind {
                match self {
                    $(Self::$variant(_) => ExtensionKind::$variant,)*
                }
            }

            #[must_use]
            pub const fn body(&self) -> &ExtensionBody {
                match self {
                    $(Self::$variant(body) => body,)*
                }
            }

            #[must_use]
            pub fn into_body(self) -> ExtensionBody {
                match self {
                    $(Self::$variant(body) => body,)*
                }
            }
        }
    };
}

define_extension_kinds! {
    AvailabilityState => "availability-state",
    Config => "config",
    Consent => "consent",
    DelegatedAdmin => "delegated-admin",
    DirectoryRestApi => "directory-rest-api",
    FileServer => "file-server",
    Gateway => "gateway",
    GroovyScripted => "groovy-scripted",
    LdapMappedScim => "ldap-mapped-scim",
    /// Exposes server metrics over HTTP.
    Metrics => "metrics",
    PrometheusMonitoring => "prometheus-monitoring",
    Quickstart => "quickstart",
    Scim2 => "scim2",
    /// Java extension loaded through the server SDK.
    ThirdParty => "third-party",
    Velocity => "velocity",
}

impl ExtensionKind {
    /// Resolve a kind from a full schema URN, e.g.
    /// `urn:pingidentity:schemas:configuration:2.0:http-servlet-extension:metrics`.
    #[must_use]
    pub fn from_schema_urn(urn: &str) -> Option<Self> {
        urn.strip_prefix(SCHEMA_URN_PREFIX).and_then(Self::from_tag)
    }

    #[must_use]
    pub fn schema_urn(self) -> String {
        format!("{SCHEMA_URN_PREFIX}{}", self.as_str())
    }
}

impl std::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HttpServletExtension {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.body().id
    }
}

#[derive(Serialize)]
struct TaggedExtension<'a> {
    #[serde(rename = "type")]
    kind: ExtensionKind,
    id: &'a str,
    #[serde(flatten)]
    attributes: &'a Map<String, Value>,
}

impl Serialize for HttpServletExtension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let body = self.body();
        TaggedExtension {
            kind: self.kind(),
            id: &body.id,
            attributes: &body.attributes,
        }
        .serialize(serializer)
    }
}

/// A resource entry as it appears in an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListedResource {
    Extension(HttpServletExtension),
    /// No schema names a known kind, or the record carries no usable id.
    Unrecognized {
        id: Option<String>,
        schemas: Vec<String>,
        attributes: Map<String, Value>,
    },
}

#[derive(Deserialize)]
struct RawResource {
    #[serde(default)]
    schemas: Vec<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl From<RawResource> for ListedResource {
    fn from(raw: RawResource) -> Self {
        let kind = raw
            .schemas
            .iter()
            .find_map(|urn| ExtensionKind::from_schema_urn(urn));

        match (kind, raw.id) {
            (Some(kind), Some(id)) if !id.is_empty() => {
                Self::Extension(HttpServletExtension::from_parts(
                    kind,
                    ExtensionBody {
                        id,
                        attributes: raw.attributes,
                    },
                ))
            }
            (_, id) => Self::Unrecognized {
                id,
                schemas: raw.schemas,
                attributes: raw.attributes,
            },
        }
    }
}

impl<'de> Deserialize<'de> for ListedResource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawResource::deserialize(deserializer).map(Self::from)
    }
}

#[derive(Serialize)]
struct UnrecognizedResource<'a> {
    schemas: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(flatten)]
    attributes: &'a Map<String, Value>,
}

impl Serialize for ListedResource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Extension(extension) => extension.serialize(serializer),
            Self::Unrecognized {
                id,
                schemas,
                attributes,
            } => UnrecognizedResource {
                schemas,
                id: id.as_deref(),
                attributes,
            }
            .serialize(serializer),
        }
    }
}

impl From<HttpServletExtension> for ListedResource {
    fn from(extension: HttpServletExtension) -> Self {
        Self::Extension(extension)
    }
}
