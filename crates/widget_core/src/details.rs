//! UserDetails - Server-collected conversation fields
//!
//! The backend accumulates whatever it has collected so far (name, email,
//! category, ...) and echoes the whole map back on every reply. The client
//! stores it verbatim and sends it back unchanged on the next request;
//! only a handful of keys are ever read locally.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Details the backend has collected so far, echoed back on each request.
///
/// `stage_history` is the server-maintained back-navigation list; all
/// other keys are opaque to the client and round-trip through `fields`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UserDetails {
    #[serde(default)]
    pub stage_history: Vec<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserDetails {
    /// Whether the server has stages to go back to.
    pub fn has_history(&self) -> bool {
        !self.stage_history.is_empty()
    }

    /// String value of a collected field, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Selected proposal category, once collected.
    pub fn category(&self) -> Option<&str> {
        self.get_str("category")
    }

    /// Name of the custom category, when the user picked "other".
    pub fn custom_category_name(&self) -> Option<&str> {
        self.get_str("custom_category_name")
    }
}
