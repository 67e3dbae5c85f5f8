//! Wire types for the proposal backend endpoints
//!
//! One request/response pair per endpoint. Field names match the backend
//! JSON exactly; the client never interprets more of a reply than what is
//! modeled here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::details::UserDetails;
use crate::directive::UiDirective;

/// Body of `POST /chat`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub stage: String,
    pub user_details: UserDetails,
    pub user_input: String,
}

/// Reply from `POST /chat`.
///
/// `next_stage` and `user_details` are stored verbatim; the client never
/// computes a stage itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub next_stage: String,
    pub user_details: UserDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_elements: Option<UiDirective>,
}

/// Body of `POST /generate-proposal`. The response body is unused beyond
/// success or failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProposalRequest {
    pub user_details: UserDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_category_data: Option<Value>,
}

impl ProposalRequest {
    /// Build the generation request from the final details of a
    /// conversation. `custom_category_data` is not collected anywhere in
    /// the conversation flow and is therefore always absent here.
    pub fn from_details(details: &UserDetails) -> Self {
        Self {
            category: details.category().map(str::to_string),
            custom_category_name: details.custom_category_name().map(str::to_string),
            custom_category_data: None,
            user_details: details.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_body() {
        let request = ChatRequest {
            stage: "get_name".into(),
            user_details: UserDetails::default(),
            user_input: "new proposal".into(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["stage"], "get_name");
        assert_eq!(body["user_input"], "new proposal");
        assert!(body["user_details"]["stage_history"].is_array());
    }

    #[test]
    fn test_chat_reply_optionals_absent() {
        let json = r#"{"next_stage":"get_email","user_details":{"stage_history":[]}}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.next_stage, "get_email");
        assert!(reply.bot_message.is_none());
        assert!(reply.ui_elements.is_none());
    }

    #[test]
    fn test_chat_reply_with_directive() {
        let json = r#"{
            "next_stage": "get_category",
            "user_details": {"stage_history": ["get_name"], "name": "Ada"},
            "bot_message": "Pick a category",
            "ui_elements": {"type": "dropdown", "options": ["Web", "Mobile"]}
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.bot_message.as_deref(), Some("Pick a category"));
        assert!(matches!(reply.ui_elements, Some(UiDirective::Dropdown { .. })));
    }

    #[test]
    fn test_proposal_request_omits_absent_keys() {
        let details: UserDetails =
            serde_json::from_str(r#"{"stage_history":[],"category":"web"}"#).unwrap();
        let request = ProposalRequest::from_details(&details);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["category"], "web");
        assert!(body.get("custom_category_name").is_none());
        assert!(body.get("custom_category_data").is_none());
    }
}
