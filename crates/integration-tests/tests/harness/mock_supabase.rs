//! Supabase Storage and PostgREST endpoints backed by wiremock

use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub struct MockSupabase {
    server: MockServer,
}

impl MockSupabase {
    /// Accept every upload and every update
    pub async fn start() -> Self {
        Self::with_upload_response(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Key": "podcasts/uploaded.mp3"
        })))
        .await
    }

    /// Answer uploads with `response`; updates always succeed
    pub async fn with_upload_response(response: ResponseTemplate) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(r"^/storage/v1/object/.+"))
            .respond_with(response)
            .mount(&server)
            .await;

        Mock::given(method("PATCH"))
            .and(path_regex(r"^/rest/v1/.+"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        Self { server }
    }

    /// Reject uploads as a duplicate object
    pub async fn duplicate_uploads() -> Self {
        Self::with_upload_response(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "statusCode": "409",
            "error": "Duplicate",
            "message": "The resource already exists"
        })))
        .await
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Storage upload requests, in order
    pub async fn uploads(&self) -> Vec<Request> {
        self.requests("POST", "/storage/v1/object/").await
    }

    /// PostgREST update requests, in order
    pub async fn updates(&self) -> Vec<Request> {
        self.requests("PATCH", "/rest/v1/").await
    }

    async fn requests(&self, verb: &str, prefix: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.method.as_str() == verb && request.url.path().starts_with(prefix))
            .collect()
    }
}

/// Value of a request header, if present and valid UTF-8
pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}
