//! Integration tests for `ExtensionListReader`.
//!
//! These tests verify that:
//! - Every well-formed record becomes exactly one `{id, type}` summary
//! - Filters reach the API only when non-empty
//! - Repeated reads over identical data yield identical state

use async_trait::async_trait;
use dsconf_core::{
    Error, ExtensionApi, ExtensionBody, ExtensionKind, ExtensionListReader, ExtensionListResponse,
    ExtensionSummary, HttpServletExtension, ListRequest, ListedResource, Result,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

struct RecordingApi {
    response: serde_json::Value,
    requests: Mutex<Vec<ListRequest>>,
}

impl RecordingApi {
    fn new(response: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded_filters(&self) -> Vec<Option<String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.filter().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl ExtensionApi for RecordingApi {
    async fn list_extensions(&self, request: &ListRequest) -> Result<ExtensionListResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(serde_json::from_value(self.response.clone())?)
    }

    async fn get_extension(&self, name: &str) -> Result<ListedResource> {
        Err(Error::NotFound(name.to_string()))
    }
}

fn resource(tag: &str, id: &str) -> serde_json::Value {
    json!({
        "schemas": [format!(
            "urn:pingidentity:schemas:configuration:2.0:http-servlet-extension:{tag}"
        )],
        "id": id,
        "meta": {"resourceType": "HTTP Servlet Extension"}
    })
}

fn list_response(resources: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "schemas": ["urn:pingidentity:schemas:configuration:messages:2.0:ListResponse"],
        "totalResults": resources.len(),
        "Resources": resources
    })
}

#[tokio::test]
async fn test_metrics_and_file_server_example() {
    let api = RecordingApi::new(list_response(vec![
        resource("metrics", "metrics-ext"),
        resource("file-server", "fs-ext"),
    ]));
    let reader = ExtensionListReader::new(api);

    let state = reader.list(None).await.unwrap();

    assert_eq!(state.id, "id");
    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "id": "id",
            "filter": null,
            "objects": [
                {"id": "fs-ext", "type": "file-server"},
                {"id": "metrics-ext", "type": "metrics"}
            ]
        })
    );
}

#[tokio::test]
async fn test_record_with_empty_id_does_not_fail_the_read() {
    let api = RecordingApi::new(list_response(vec![
        resource("metrics", "metrics-ext"),
        resource("file-server", ""),
    ]));
    let reader = ExtensionListReader::new(api);

    let state = reader.list(None).await.unwrap();

    assert_eq!(state.objects.len(), 1);
    assert!(
        state
            .objects
            .contains(&ExtensionSummary::new("metrics-ext", ExtensionKind::Metrics))
    );
}

#[tokio::test]
async fn test_every_kind_is_flattened() {
    let resources = ExtensionKind::ALL
        .iter()
        .map(|kind| resource(kind.as_str(), &format!("{kind}-ext")))
        .collect();
    let reader = ExtensionListReader::new(RecordingApi::new(list_response(resources)));

    let state = reader.list(None).await.unwrap();

    assert_eq!(state.objects.len(), ExtensionKind::ALL.len());
    for kind in ExtensionKind::ALL {
        assert!(
            state
                .objects
                .contains(&ExtensionSummary::new(format!("{kind}-ext"), *kind)),
            "missing summary for {kind}"
        );
    }
}

#[tokio::test]
async fn test_filter_forwarded_only_when_non_empty() {
    let api = RecordingApi::new(list_response(vec![]));
    let reader = ExtensionListReader::new(Arc::clone(&api));

    reader.list(None).await.unwrap();
    reader.list(Some("")).await.unwrap();
    let state = reader.list(Some("id eq \"fs-ext\"")).await.unwrap();

    assert_eq!(
        api.recorded_filters(),
        vec![None, None, Some("id eq \"fs-ext\"".to_string())]
    );
    assert_eq!(state.filter.as_deref(), Some("id eq \"fs-ext\""));
    assert!(state.objects.is_empty());
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let reader = ExtensionListReader::new(RecordingApi::new(list_response(vec![
        resource("scim2", "scim"),
        resource("velocity", "velocity"),
        resource("scim2", "scim"),
    ])));

    let first = reader.list(None).await.unwrap();
    let second = reader.list(None).await.unwrap();

    assert_eq!(first, second);
    // duplicate records collapse under set semantics
    assert_eq!(first.objects.len(), 2);
}

#[tokio::test]
async fn test_reader_over_trait_object() {
    let api: Arc<dyn ExtensionApi> = RecordingApi::new(list_response(vec![resource(
        "gateway", "gw",
    )]));
    let reader: ExtensionListReader = ExtensionListReader::new(api);

    let state = reader.list(None).await.unwrap();
    assert!(
        state
            .objects
            .contains(&ExtensionSummary::new("gw", ExtensionKind::Gateway))
    );

    let missing = reader.get("gw").await;
    assert!(matches!(missing, Err(Error::NotFound(name)) if name == "gw"));
}

#[test]
fn test_body_attributes_survive_decoding() {
    let resource: ListedResource =
        serde_json::from_value(resource("delegated-admin", "admin-ui")).unwrap();
    let expected = HttpServletExtension::DelegatedAdmin(
        ExtensionBody::new("admin-ui")
            .with_attribute("meta", json!({"resourceType": "HTTP Servlet Extension"})),
    );
    assert_eq!(resource, ListedResource::Extension(expected));
}
