#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod api;
pub mod error;
pub mod extension;
pub mod reader;
pub mod state;

pub use api::{ExtensionApi, ExtensionListResponse, ListRequest};
pub use error::{Error, Result};
pub use extension::{ExtensionBody, ExtensionKind, HttpServletExtension, ListedResource};
pub use reader::ExtensionListReader;
pub use state::{ExtensionSummary, ExtensionsState, STATE_ID};
