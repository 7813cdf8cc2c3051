//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    pub fn failure() -> Self {
        Self {
            success: false,
            custom_response: None,
        }
    }
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test chat ID
pub fn test_chat_id() -> i64 {
    987654321
}

/// Path of a Bot API method; teloxide posts to the method name in PascalCase,
/// e.g. `SendMessage`
fn endpoint(name: &str) -> String {
    format!("/bot{}/{}", test_bot_token(), name)
}

fn message_json(text: &str) -> Value {
    json!({
        "message_id": 123,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "TestBot",
            "username": "test_bot"
        },
        "chat": {
            "id": test_chat_id(),
            "first_name": "Test",
            "type": "private"
        },
        "date": 1640995200,
        "text": text
    })
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot talking to this server instead of api.telegram.org
    pub fn bot(&self) -> Bot {
        let url = url::Url::parse(&self.server.uri()).expect("mock server uri");
        Bot::new(test_bot_token()).set_api_url(url)
    }

    async fn mount(&self, name: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(endpoint(name)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": message_json("Test message") })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: chat not found"
                })
            }
        });

        self.mount("SendMessage", if config.success { 200 } else { 400 }, body).await;
    }

    /// Setup mock for editMessageText endpoint
    pub async fn mock_edit_message_text(&self, config: MockResponseConfig) {
        let body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                let mut message = message_json("Edited test message");
                message["edit_date"] = json!(1640995260);
                json!({ "ok": true, "result": message })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: message is not modified: specified new message content and reply markup are exactly the same as a current content and reply markup of the message"
                })
            }
        });

        self.mount("EditMessageText", if config.success { 200 } else { 400 }, body).await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        let body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({ "ok": true, "result": true })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: query is too old and response timeout expired or query ID is invalid"
                })
            }
        });

        self.mount("AnswerCallbackQuery", if config.success { 200 } else { 400 }, body).await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_send_message(config.clone()).await;
        self.mock_edit_message_text(config.clone()).await;
        self.mock_answer_callback_query(config).await;
    }

    /// Bodies of the requests received by an endpoint, in order
    pub async fn requests_to(&self, name: &str) -> Vec<Value> {
        let wanted = endpoint(name);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path() == wanted)
            .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, name: &str, times: usize) {
        let matching = self.requests_to(name).await.len();

        assert_eq!(
            matching, times,
            "Expected {} calls to {}, but got {}",
            times, name, matching
        );
    }
}
