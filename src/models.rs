// Request and response envelope types

use serde::{Deserialize, Serialize};

use crate::store::MessageRecord;

/// Status string carried by every successful envelope
pub const STATUS_ALL_GOOD: &str = "all good";

/// Status string for failed message retrieval (list and find-by-id)
pub const STATUS_RETRIEVE_FAILED: &str = "failed to retrieve messages from the database";

/// Status string for failed message creation
pub const STATUS_SAVE_FAILED: &str = "failed to save the message to the database";

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct SaveMessageRequest {
    // Both fields optional on purpose: presence is enforced by the store,
    // not by body parsing
    pub name: Option<String>,
    pub message: Option<String>,
}

// Success envelope for GET /messages and GET /messages/:messageId
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageRecord>,
    pub status: String,
}

// Success envelope for POST /messages/save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMessageResponse {
    pub message: MessageRecord,
    pub status: String,
}

// Failure envelope shared by all routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: String,
}

// GET /about payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub about_text: String,
    pub img_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_messages_response_empty_shape() {
        let response = MessagesResponse {
            messages: Vec::new(),
            status: STATUS_ALL_GOOD.to_string(),
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert_eq!(serialized, r#"{"messages":[],"status":"all good"}"#);
    }

    #[test]
    fn test_saved_message_response_shape() {
        let record = MessageRecord {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            message: "hello".to_string(),
        };
        let response = SavedMessageResponse {
            message: record,
            status: STATUS_ALL_GOOD.to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"]["name"], "Alice");
        assert_eq!(value["message"]["message"], "hello");
        assert_eq!(value["status"], "all good");
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            error: "Connection error: refused".to_string(),
            status: STATUS_RETRIEVE_FAILED.to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], "Connection error: refused");
        assert_eq!(
            value["status"],
            "failed to retrieve messages from the database"
        );
    }

    #[test]
    fn test_about_response_uses_camel_case_keys() {
        let response = AboutResponse {
            about_text: "text".to_string(),
            img_url: "url".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["aboutText"], "text");
        assert_eq!(value["imgUrl"], "url");
        assert!(value.get("about_text").is_none());
    }

    #[test]
    fn test_save_request_missing_fields_still_deserialize() {
        let request: SaveMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.message.is_none());

        let request: SaveMessageRequest =
            serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert!(request.message.is_none());
    }

    #[test]
    fn test_save_request_full_deserialization() {
        let json = r#"{"name":"Alice","message":"hello"}"#;
        let request: SaveMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert_eq!(request.message.as_deref(), Some("hello"));
    }
}
